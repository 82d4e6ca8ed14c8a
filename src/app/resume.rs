use leptos::prelude::*;

use super::reveal::Reveal;
use crate::nav::SectionId;
use crate::reveal::Motion;

#[component]
pub fn ResumeSection(resume: &'static str) -> impl IntoView {
    view! {
        <section id=SectionId::Resume.as_str() class="py-20 px-6 max-w-6xl mx-auto">
            <Reveal
                motion=Motion::Scale(95)
                class="bg-gradient-to-br from-slate-900 to-slate-800 border border-slate-700 rounded-2xl p-8 md:p-12 text-center shadow-xl relative overflow-hidden"
            >
                <div class="absolute top-0 right-0 w-64 h-64 bg-purple-500/10 blur-3xl -z-0 rounded-full" />
                <div class="relative z-10 flex flex-col items-center">
                    <div class="w-16 h-16 bg-slate-800 rounded-full flex items-center justify-center mb-6 border border-slate-600 text-3xl">
                        "📄"
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Resume"</h2>
                    <p class="text-slate-400 max-w-2xl mx-auto mb-8 text-lg">
                        "Want to see the full picture? Check out my resume for a detailed history of my education, professional experience, and technical skill set."
                    </p>
                    <a
                        href=resume
                        target="_blank"
                        rel="noopener noreferrer"
                        class="group flex items-center gap-3 px-8 py-4 bg-purple-600 hover:bg-purple-500 text-white rounded-full font-bold transition-all shadow-lg hover:shadow-purple-500/25"
                    >
                        <span class="group-hover:scale-110 transition-transform">"👁"</span>
                        "View Resume"
                    </a>
                </div>
            </Reveal>
        </section>
    }
}
