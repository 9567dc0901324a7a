use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use crate::{
    nav::{ScrollTracker, Section},
    site,
};

use super::navigation::{DomViewport, NavContext};

const MOBILE_QUERY: &str = "(max-width: 599px)";

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let tracker = StoredValue::new(ScrollTracker::new());
    let is_mobile = use_media_query(MOBILE_QUERY);

    let measure = move || {
        nav.apply(|state| {
            tracker.update_value(|t| {
                t.on_frame(state, &DomViewport);
            });
        });
    };

    let on_scroll = move || {
        let mut schedule = false;
        tracker.update_value(|t| schedule = t.on_scroll());
        if schedule {
            request_animation_frame(measure);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());
    let _ = use_event_listener(use_window(), ev::resize, move |_| on_scroll());

    // initial sample once the sections are mounted
    Effect::new(move |_| measure());

    // a drawer left open while widening the window would be unreachable
    Effect::new(move |_| {
        if !is_mobile.get() {
            nav.close_drawer();
        }
    });

    view! {
        <header class=move || {
            if nav.elevated() {
                "fixed inset-x-0 top-0 z-40 transition-all duration-300 bg-background/80 backdrop-blur-md border-b border-white/5 shadow-lg"
            } else {
                "fixed inset-x-0 top-0 z-40 transition-all duration-300 bg-transparent border-b border-transparent"
            }
        }>
            <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4 sm:px-6 lg:px-8">
                <a
                    href="#hero"
                    class="text-xl font-bold tracking-tight text-foreground"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(Section::Hero);
                    }
                >
                    {site::OWNER}
                </a>
                {move || {
                    if is_mobile.get() {
                        Either::Left(
                            view! {
                                <button
                                    aria-label="open drawer"
                                    class="text-2xl text-foreground px-2"
                                    on:click=move |_| nav.toggle_drawer()
                                >
                                    "☰"
                                </button>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <nav class="flex gap-1">
                                    {Section::ALL
                                        .into_iter()
                                        .map(|section| view! { <NavLink section /> })
                                        .collect_view()}
                                </nav>
                            },
                        )
                    }
                }}
            </div>
        </header>
        <Drawer />
    }
}

#[component]
fn NavLink(section: Section, #[prop(optional)] in_drawer: bool) -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let active = Memo::new(move |_| nav.active() == section);
    let base = if in_drawer {
        "block w-full rounded-md px-4 py-3 text-left"
    } else {
        "rounded-md px-3 py-2 text-sm font-medium border-b-2"
    };

    view! {
        <a
            href=format!("#{}", section.id())
            aria-current=move || active.get().then_some("true")
            class=move || {
                let state = match (active.get(), in_drawer) {
                    (true, false) => "text-foreground border-violet",
                    (false, false) => "text-muted hover:text-foreground border-transparent",
                    (true, true) => "text-foreground bg-white/5",
                    (false, true) => "text-muted hover:text-foreground hover:bg-white/5",
                };
                format!("{base} {state} transition-colors duration-200")
            }
            on:click=move |ev| {
                ev.prevent_default();
                nav.navigate(section);
            }
        >
            {section.label()}
        </a>
    }
}

#[component]
fn Drawer() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let open = Memo::new(move |_| nav.drawer_open());

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 bg-black/60" on:click=move |_| nav.close_drawer()></div>
            <aside class="fixed right-0 top-0 z-50 h-full w-64 border-l border-white/10 bg-background p-4 pt-20">
                <nav class="flex flex-col gap-1">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section in_drawer=true /> })
                        .collect_view()}
                </nav>
            </aside>
        </Show>
    }
}
