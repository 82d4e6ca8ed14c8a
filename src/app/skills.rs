use std::time::Duration;

use leptos::prelude::*;

use super::links::Tags;
use super::reveal::Reveal;
use crate::content::{Profile, SkillCategory};
use crate::nav::SectionId;
use crate::reveal::Stagger;

const CARD_STAGGER: Stagger = Stagger::new(Duration::from_millis(100));

#[component]
pub fn Skills(profile: &'static Profile) -> impl IntoView {
    let cards = SkillCategory::ALL
        .into_iter()
        .filter_map(|category| profile.skill_group(category))
        .enumerate()
        .map(|(i, group)| {
            view! {
                <Reveal
                    delay=CARD_STAGGER.delay_for(i)
                    class="bg-slate-800/40 border border-slate-700 p-8 rounded-2xl hover:border-purple-500/50 transition-colors"
                >
                    <div class="flex items-center gap-3 mb-6">
                        <span class="text-purple-400 text-2xl">{group.category.icon()}</span>
                        <h3 class="text-xl font-bold text-white">{group.category.title()}</h3>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <Tags
                            tags=group.skills.as_slice()
                            class="px-3 py-1 bg-slate-900 text-slate-300 text-sm font-medium rounded-lg border border-slate-700"
                        />
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::Skills.as_str() class="py-20 bg-slate-900/50">
            <div class="max-w-6xl mx-auto px-6">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Technical Proficiency"</h2>
                    <div class="w-16 h-1 bg-purple-500 mx-auto rounded-full" />
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">{cards}</div>
            </div>
        </section>
    }
}
