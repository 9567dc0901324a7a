use leptos::{either::EitherOf3, html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{
    preview::{
        PreviewEvent, PreviewState, Surface, PREVIEW_ALLOW, PREVIEW_SANDBOX, PREVIEW_TIMEOUT,
    },
    projects::Project,
};

/// Live, sandboxed embed of a project's site. Falls back to the static
/// thumbnail on error or timeout and never retries.
#[component]
pub fn ProjectPreview(
    project: &'static Project,
    #[prop(optional)] full_screen: bool,
) -> impl IntoView {
    let url = project.preview_url();
    let state = RwSignal::new(PreviewState::new(url.is_some()));
    // effects only run in the browser, after hydration
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));
    let surface = Memo::new(move |_| state.get().surface(mounted.get()));
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);

    let apply = move |event: PreviewEvent| {
        let Some(current) = state.try_get_untracked() else {
            return;
        };
        let next = current.on_event(event);
        if next != current {
            if next == PreviewState::Fallback {
                log::debug!("preview of {} fell back to thumbnail: {event:?}", project.title);
            }
            state.set(next);
        }
    };

    // the embed is lazy, so only start the clock once the card is on screen
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !visible.get() {
            return false;
        }
        if state.get_untracked().shows_spinner() {
            set_timeout(move || apply(PreviewEvent::Timeout), PREVIEW_TIMEOUT);
        }
        true
    });

    let (container, frame) = if full_screen {
        ("relative h-[80vh] overflow-hidden bg-white/[0.03]", "h-full w-full border-0")
    } else {
        (
            "relative h-[220px] md:h-full md:min-h-[320px] overflow-hidden rounded-t-xl bg-white/[0.03]",
            "h-[200%] w-[200%] origin-top-left scale-50 border-0",
        )
    };

    view! {
        <div node_ref=target class=container>
            <Show when=move || state.get().shows_spinner()>
                <div class="absolute inset-0 flex items-center justify-center bg-white/[0.03]">
                    <div class="spinner" role="progressbar" aria-label="Loading preview"></div>
                </div>
            </Show>
            {move || match (url.clone(), surface.get()) {
                (_, Surface::Placeholder) => EitherOf3::A(()),
                (Some(src), Surface::Frame) => {
                    EitherOf3::B(
                        view! {
                            <iframe
                                {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                                src=src
                                title=project.title.clone()
                                sandbox=PREVIEW_SANDBOX
                                allow=PREVIEW_ALLOW
                                referrerpolicy="no-referrer"
                                class=format!("{frame} transition-opacity duration-300")
                                style=move || {
                                    if state.get().shows_spinner() { "opacity: 0" } else { "opacity: 1" }
                                }
                                on:load=move |_| apply(PreviewEvent::Load)
                                on:error=move |_| apply(PreviewEvent::Error)
                            ></iframe>
                        },
                    )
                }
                _ => {
                    EitherOf3::C(
                        view! {
                            <img
                                src=project.image.clone()
                                alt=project.title.clone()
                                class="h-full w-full object-contain"
                            />
                        },
                    )
                }
            }}
        </div>
    }
}
