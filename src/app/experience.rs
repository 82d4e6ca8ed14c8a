use std::time::Duration;

use leptos::prelude::*;

use super::links::{LinkAction, Tags};
use super::reveal::Reveal;
use crate::content::Internship;
use crate::nav::SectionId;
use crate::reveal::{Motion, Stagger};

const CARD_STAGGER: Stagger = Stagger::new(Duration::from_millis(200));

#[component]
pub fn Experience(internships: &'static [Internship]) -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-20 px-6 max-w-6xl mx-auto">
            <div class="mb-16 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Professional Experience"</h2>
                <div class="w-16 h-1 bg-purple-500 mx-auto rounded-full" />
            </div>
            <div class="max-w-4xl mx-auto space-y-8">
                {internships
                    .iter()
                    .enumerate()
                    .map(|(i, job)| view! { <InternshipCard job delay=CARD_STAGGER.delay_for(i) /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn InternshipCard(job: &'static Internship, delay: Duration) -> impl IntoView {
    view! {
        <Reveal
            motion=Motion::SlideIn
            delay
            class="bg-slate-900/50 border-l-4 border-purple-500 rounded-r-xl p-8 hover:bg-slate-800/50 transition-colors"
        >
            <div class="flex flex-col md:flex-row md:items-center justify-between mb-4 gap-2">
                <div>
                    <h3 class="text-xl font-bold text-white">{job.role.as_str()}</h3>
                    <div class="text-purple-400 font-medium flex items-center gap-2">
                        "💼 " {job.company.as_str()}
                    </div>
                </div>
                <span class="text-slate-500 text-sm font-mono bg-slate-800 px-3 py-1 rounded-full w-fit">
                    {job.period.as_str()}
                </span>
            </div>
            <p class="text-slate-400 leading-relaxed mb-6">{job.description.as_str()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                <Tags
                    tags=job.tech.as_slice()
                    class="text-xs font-semibold text-purple-300 bg-purple-500/10 px-3 py-1 rounded-full border border-purple-500/20"
                />
            </div>
            {job
                .link
                .as_deref()
                .map(|link| {
                    view! {
                        <div class="mt-6">
                            <LinkAction link />
                        </div>
                    }
                })}
        </Reveal>
    }
}
