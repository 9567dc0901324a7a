use leptos::prelude::*;

use crate::{
    about::{AboutView, Card, SKILLS},
    nav::Section,
    reveal::{stagger, CARD_STAGGER},
};

use super::reveal::SectionReveal;

const ABOUT_MARGIN: u32 = 80;

#[component]
pub fn About() -> impl IntoView {
    let (selected, set_selected) = signal(AboutView::default());

    view! {
        <section id=Section::About.id() class="relative scroll-mt-16 bg-background py-20 md:py-32">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <SectionReveal margin=ABOUT_MARGIN>
                    <h2 class="mb-4 text-center text-4xl font-bold text-foreground md:text-5xl">
                        "Who I Am"
                    </h2>
                    <p class="mx-auto mb-10 max-w-xl text-center text-muted">
                        "A unique blend of military discipline, multi-industry experience, and modern technical expertise."
                    </p>
                </SectionReveal>

                <SectionReveal delay=0.1 margin=ABOUT_MARGIN>
                    <div class="mb-12 flex justify-center">
                        <div
                            role="group"
                            aria-label="view selector"
                            class="inline-flex rounded-full border border-white/10 bg-white/[0.04] p-1"
                        >
                            {AboutView::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <button
                                            aria-pressed=move || (selected.get() == option).to_string()
                                            class=move || {
                                                if selected.get() == option {
                                                    "rounded-full px-6 py-2 text-sm font-medium text-white bg-gradient-to-br from-violet to-blue"
                                                } else {
                                                    "rounded-full px-6 py-2 text-sm font-medium text-subtle hover:bg-white/5"
                                                }
                                            }
                                            on:click=move |_| {
                                                if selected.get_untracked() != option {
                                                    set_selected.set(option);
                                                }
                                            }
                                        >
                                            {option.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </SectionReveal>

                // re-rendered per view so the new cards reveal again
                <div class="mb-24">{move || view! { <CardGrid cards=selected.get().journey() accent=Accent::Violet /> }}</div>

                <SectionReveal margin=ABOUT_MARGIN>
                    <h3 class="mb-4 text-center text-3xl font-bold text-foreground md:text-4xl">
                        "Technical Expertise"
                    </h3>
                    <p class="mx-auto mb-12 max-w-lg text-center text-muted">
                        "The tools and technologies I use to bring ideas to life."
                    </p>
                </SectionReveal>
                <CardGrid cards=&SKILLS accent=Accent::Cyan />
            </div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accent {
    Violet,
    Cyan,
}

impl Accent {
    fn badge(self) -> &'static str {
        match self {
            Accent::Violet => "bg-gradient-to-br from-violet/15 to-blue/15 text-violet-light",
            Accent::Cyan => "bg-gradient-to-br from-cyan/15 to-teal/15 text-cyan",
        }
    }

    fn chip(self) -> &'static str {
        match self {
            Accent::Violet => "bg-white/5 text-muted border-white/10",
            Accent::Cyan => "bg-cyan/10 text-cyan border-cyan/20",
        }
    }

    fn hover(self) -> &'static str {
        match self {
            Accent::Violet => "hover:border-violet/30 hover:shadow-[0_8px_40px_rgba(124,58,237,0.1)]",
            Accent::Cyan => "hover:border-cyan/30 hover:shadow-[0_8px_40px_rgba(6,182,212,0.1)]",
        }
    }
}

#[component]
fn CardGrid(cards: &'static [Card], accent: Accent) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
            {cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    view! {
                        <SectionReveal
                            delay=stagger(index, CARD_STAGGER)
                            margin=ABOUT_MARGIN
                            class="h-full"
                        >
                            <div class=format!(
                                "glass-card flex h-full flex-col items-center p-8 text-center transition-all duration-300 hover:-translate-y-1 {}",
                                accent.hover(),
                            )>
                                <div class=format!("mb-4 rounded-full p-3 text-3xl {}", accent.badge())>
                                    {card.icon}
                                </div>
                                <h4 class="mb-2 text-lg font-semibold text-foreground">{card.title}</h4>
                                <p class="mb-4 flex-grow text-sm text-muted">{card.description}</p>
                                <div class="flex flex-wrap justify-center gap-2">
                                    {card
                                        .chips
                                        .iter()
                                        .map(|chip| {
                                            view! {
                                                <span class=format!(
                                                    "rounded-full border px-3 py-1 text-xs {}",
                                                    accent.chip(),
                                                )>{*chip}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </SectionReveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
