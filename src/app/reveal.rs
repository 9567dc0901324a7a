use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::reveal::{Reveal, RevealState};

/// Fades its children up the first time they scroll into view.
#[component]
pub fn SectionReveal(
    /// Seconds to wait after the element becomes visible.
    #[prop(optional)]
    delay: f64,
    #[prop(optional)] margin: Option<u32>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let reveal = Reveal::default().delay(delay);
    let reveal = margin.map_or(reveal, |m| reveal.margin(m));
    let target = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealState::Pending);

    let _ = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let Some(mut current) = state.try_get_untracked() else {
                return;
            };
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            if current.observe(visible) {
                state.set(current);
                // one-shot: leaving and re-entering the viewport never replays
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().root_margin(reveal.root_margin()),
    );

    view! {
        <div node_ref=target class=class style=move || reveal.style(state.get())>
            {children()}
        </div>
    }
}

/// Plays a transition once on mount rather than on visibility.
#[component]
pub fn Entrance(reveal: Reveal, children: Children) -> impl IntoView {
    let state = RwSignal::new(RevealState::Pending);

    Effect::new(move |_| {
        // wait a frame so the pending style is painted before transitioning
        request_animation_frame(move || {
            state.try_set(RevealState::Revealed);
        });
    });

    view! {
        <div style=move || reveal.style(state.get())>{children()}</div>
    }
}
