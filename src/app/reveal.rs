use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::{Entrance, Motion, Oscillation, Timing};

/// Wraps `children` in a block that animates in the first time it becomes
/// visible.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay: Duration,
    #[prop(default = Timing::default().duration)] duration: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (entrance, set_entrance) = signal(Entrance::new(motion, Timing { duration, delay }));
    let in_view = use_element_visibility(target);

    Effect::new(move |_| {
        if in_view.get() {
            set_entrance.maybe_update(|e| e.enter());
        }
    });

    view! {
        <div node_ref=target class=class style=move || entrance.with(|e| e.style())>
            {children()}
        </div>
    }
}

#[component]
pub fn Float(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=class style=Oscillation::PHOTO.style()>
            {children()}
        </div>
    }
}
