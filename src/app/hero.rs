use leptos::prelude::*;

use crate::{
    nav::Section,
    reveal::{stagger, Reveal},
    site,
};

use super::{navigation::NavContext, reveal::Entrance};

const HERO_DELAY: f64 = 0.3;
const HERO_STAGGER: f64 = 0.2;

fn cascade(index: usize) -> Reveal {
    Reveal::entrance().delay(HERO_DELAY + stagger(index, HERO_STAGGER))
}

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let indicator = Reveal {
        delay: 2.0,
        duration: 1.0,
        offset: 0.0,
        ..Reveal::default()
    };

    view! {
        <section
            id=Section::Hero.id()
            class="relative flex min-h-screen items-center justify-center overflow-hidden bg-background"
        >
            <div class="absolute inset-0 z-0 overflow-hidden" aria-hidden="true">
                <div class="mesh-blob mesh-violet"></div>
                <div class="mesh-blob mesh-blue"></div>
                <div class="mesh-blob mesh-teal"></div>
            </div>

            <div class="relative z-10 mx-auto max-w-6xl px-4 text-center">
                <Entrance reveal=cascade(0)>
                    <p class="mb-6 text-sm font-medium uppercase tracking-[0.2em] text-violet-light">
                        {site::HEADLINE}
                    </p>
                </Entrance>
                <Entrance reveal=cascade(1)>
                    <h1 class="gradient-text mb-6 text-5xl font-extrabold leading-tight tracking-tight md:text-7xl lg:text-8xl">
                        {site::OWNER}
                    </h1>
                </Entrance>
                <Entrance reveal=cascade(2)>
                    <p class="mx-auto mb-10 max-w-2xl text-xl leading-relaxed text-muted md:text-3xl">
                        {site::TAGLINE[0]}
                        <br />
                        {site::TAGLINE[1]}
                    </p>
                </Entrance>
                <Entrance reveal=cascade(3)>
                    <button
                        class="rounded-lg bg-gradient-to-br from-violet to-blue px-10 py-4 font-semibold text-white transition-all duration-300 hover:-translate-y-0.5 hover:shadow-[0_8px_30px_rgba(124,58,237,0.3)]"
                        on:click=move |_| nav.navigate(Section::Portfolio)
                    >
                        "View My Work"
                    </button>
                </Entrance>
            </div>

            <div class="absolute bottom-10 left-1/2 z-10 -translate-x-1/2">
                <Entrance reveal=indicator>
                    <button
                        aria-label="Scroll to about"
                        class="animate-bounce text-3xl text-subtle"
                        on:click=move |_| nav.navigate(Section::About)
                    >
                        "⌄"
                    </button>
                </Entrance>
            </div>
        </section>
    }
}
