use std::time::Duration;

use leptos::prelude::*;
use web_sys::HtmlImageElement;

use super::reveal::{Float, Reveal};
use crate::content::{Platform, Profile};
use crate::nav::{NavLabel, SectionId};
use crate::reveal::Motion;

const HERO_DURATION: Duration = Duration::from_millis(800);

#[component]
pub fn Hero(profile: &'static Profile, on_navigate: Callback<NavLabel>) -> impl IntoView {
    let github = profile.social_link(Platform::GitHub);

    view! {
        <section
            id=SectionId::Home.as_str()
            class="pt-32 pb-20 px-6 max-w-6xl mx-auto min-h-screen flex flex-col md:flex-row items-center gap-12"
        >
            <Reveal duration=HERO_DURATION class="flex-1 text-center md:text-left">
                <div class="inline-block px-3 py-1 mb-6 border border-purple-500/30 rounded-full bg-purple-500/10 text-purple-400 text-xs font-bold tracking-widest uppercase">
                    {profile.role.as_str()}
                </div>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                    "Hello, I'm " <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-400">
                        {profile.name.as_str()}
                    </span>
                </h1>
                <p class="text-slate-400 text-lg md:text-xl mb-8 max-w-lg mx-auto md:mx-0 leading-relaxed">
                    {profile.bio.as_str()}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                    <button
                        class="px-8 py-4 bg-purple-600 hover:bg-purple-500 text-white rounded-full font-bold transition-all shadow-lg shadow-purple-900/20"
                        on:click=move |_| on_navigate.run(NavLabel::Projects)
                    >
                        "View My Projects"
                    </button>
                    {github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-8 py-4 bg-slate-800 hover:bg-slate-700 text-white rounded-full font-bold transition-all flex items-center justify-center gap-2"
                                >
                                    <i class="devicon-github-plain"></i>
                                    "GitHub"
                                </a>
                            }
                        })}
                </div>
            </Reveal>

            <Reveal motion=Motion::Scale(80) duration=HERO_DURATION class="relative">
                <Float class="w-72 h-72 md:w-96 md:h-96 relative z-10 rounded-full overflow-hidden border-4 border-slate-800 shadow-2xl">
                    <img
                        src=profile.photo.as_str()
                        alt=profile.name.as_str()
                        class="w-full h-full object-cover"
                        on:error=move |ev| {
                            let img = event_target::<HtmlImageElement>(&ev);
                            let failed = img.src();
                            if let Some(fallback) = profile.photo_fallback(&failed) {
                                log::warn!("profile photo {failed} failed to load, using fallback");
                                img.set_src(&fallback);
                            }
                        }
                    />
                </Float>
                <div class="absolute inset-0 bg-purple-500/30 blur-[100px] -z-10 rounded-full" />
            </Reveal>
        </section>
    }
}
