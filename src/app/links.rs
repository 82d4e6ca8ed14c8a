use leptos::{either::Either, prelude::*};

use crate::content::LinkKind;

/// Call-to-action for a project or internship link.
#[component]
pub fn LinkAction(link: &'static str) -> impl IntoView {
    let kind = LinkKind::classify(link);
    match kind.href(link) {
        None => Either::Left(view! {
            <span class="flex items-center gap-2 text-sm font-medium text-slate-500 cursor-not-allowed pt-4 border-t border-slate-800">
                {kind.label()}
            </span>
        }),
        Some(href) => {
            let (icon, suffix) = match kind {
                LinkKind::Source(host) => (Some(host.icon_class()), None),
                _ => (None, Some(" ↗")),
            };
            Either::Right(view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 text-sm font-medium text-slate-300 hover:text-purple-400 transition-colors pt-4 border-t border-slate-800 w-fit"
                >
                    {icon.map(|class| view! { <i class=class></i> })}
                    {kind.label()}
                    {suffix}
                </a>
            })
        }
    }
}

#[component]
pub fn Tags(tags: &'static [String], class: &'static str) -> impl IntoView {
    tags.iter()
        .map(|tag| view! { <span class=class>{tag.as_str()}</span> })
        .collect_view()
}
