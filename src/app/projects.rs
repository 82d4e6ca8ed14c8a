use std::time::Duration;

use leptos::prelude::*;

use super::links::{LinkAction, Tags};
use super::reveal::Reveal;
use crate::content::Project;
use crate::nav::SectionId;
use crate::reveal::Stagger;

const CARD_STAGGER: Stagger = Stagger::new(Duration::from_millis(200));

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-24 px-6 max-w-6xl mx-auto bg-slate-900/30">
            <div class="mb-16">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Featured Projects"</h2>
                <p class="text-slate-400 max-w-2xl">
                    "Here are some of the projects I've worked on. For deployed applications, you can view the live demo. For backend/systems projects, you can explore the source code."
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 items-stretch">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! { <ProjectCard project delay=CARD_STAGGER.delay_for(i) /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay: Duration) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <Reveal
            delay
            class="bg-slate-900 rounded-xl overflow-hidden border border-slate-800 hover:border-purple-500/50 transition-all group hover:shadow-2xl hover:shadow-purple-900/10 flex flex-col h-full"
        >
            <div class="relative h-48 shrink-0 overflow-hidden bg-slate-800">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                    class:hidden=move || image_failed.get()
                    on:error=move |_| {
                        log::warn!("project image {} failed to load", project.image);
                        set_image_failed.set(true);
                    }
                />
                <div class="absolute inset-0 bg-gradient-to-t from-slate-900 to-transparent opacity-60" />
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-white mb-3">{project.title.as_str()}</h3>
                <p class="text-slate-400 text-sm mb-6 leading-relaxed flex-grow">
                    {project.description.as_str()}
                </p>
                <div class="mt-auto">
                    <div class="flex flex-wrap gap-2 mb-6">
                        <Tags
                            tags=project.tags.as_slice()
                            class="px-2 py-1 bg-slate-800 text-purple-400 text-[10px] font-bold uppercase tracking-wider rounded border border-slate-700"
                        />
                    </div>
                    <LinkAction link=project.link.as_str() />
                </div>
            </div>
        </Reveal>
    }
}
