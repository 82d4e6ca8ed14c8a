use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Platform, Profile};
use crate::nav::SectionId;
use crate::reveal::Motion;

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let linkedin = profile.social_link(Platform::LinkedIn);

    view! {
        <section id=SectionId::Contact.as_str() class="py-24 bg-slate-900">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <Reveal motion=Motion::Scale(90)>
                    <div class="w-16 h-16 bg-purple-500/10 rounded-full flex items-center justify-center mx-auto mb-6 text-purple-400 text-3xl">
                        "✉"
                    </div>
                    <h2 class="text-4xl font-bold mb-6">"Let's Work Together"</h2>
                    <p class="text-slate-400 text-lg mb-10 max-w-xl mx-auto">
                        "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, my inbox is always open!"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <a
                            href=profile.mailto()
                            class="px-8 py-4 bg-white text-slate-900 rounded-lg font-bold hover:bg-slate-200 transition-colors flex items-center justify-center gap-2"
                        >
                            "📨 Say Hello"
                        </a>
                        {linkedin
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-8 py-4 border border-slate-700 text-white rounded-lg font-bold hover:bg-slate-800 transition-colors"
                                        aria-label="LinkedIn Profile"
                                    >
                                        <i class="devicon-linkedin-plain mr-2"></i>
                                        "Connect on LinkedIn"
                                    </a>
                                }
                            })}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
