use leptos::prelude::*;

use crate::nav::{MenuState, NavLabel};

#[component]
pub fn Header(
    brand: &'static str,
    menu_open: Signal<bool>,
    on_navigate: Callback<NavLabel>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="fixed w-full z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800/50">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <div
                    class="text-xl font-bold tracking-tight cursor-pointer"
                    on:click=move |_| on_navigate.run(NavLabel::About)
                >
                    {brand}
                    <span class="text-purple-500">"."</span>
                </div>

                <div class="hidden md:flex gap-8 text-sm font-medium text-slate-400">
                    <NavButtons
                        class="hover:text-purple-400 transition-colors"
                        on_navigate
                    />
                </div>

                <button
                    class="md:hidden text-slate-300 text-2xl leading-none"
                    aria-label="Toggle menu"
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>

        // mobile menu
        <div
            class="md:hidden fixed inset-x-0 top-16 bg-slate-950 border-b border-slate-800 z-40 overflow-hidden"
            style=move || MenuState::from(menu_open.get()).overlay_style()
        >
            <div class="flex flex-col p-6 gap-4 text-lg font-medium text-slate-300">
                <NavButtons class="text-left py-2 border-b border-slate-900" on_navigate />
            </div>
        </div>
    }
}

#[component]
fn NavButtons(class: &'static str, on_navigate: Callback<NavLabel>) -> impl IntoView {
    NavLabel::ALL
        .into_iter()
        .map(|label| {
            view! {
                <button class=class on:click=move |_| on_navigate.run(label)>
                    {label.as_str()}
                </button>
            }
        })
        .collect_view()
}
