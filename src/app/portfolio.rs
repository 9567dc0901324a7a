use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::{
    nav::Section,
    projects::{catalogue, split_spotlight, Project},
    reveal::{stagger, GRID_STAGGER},
};

use super::{preview::ProjectPreview, reveal::SectionReveal};

type Selected = RwSignal<Option<&'static Project>>;

#[component]
pub fn Portfolio() -> impl IntoView {
    let selected: Selected = RwSignal::new(None);
    let projects: &[Project] = match catalogue() {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("{e}");
            &[]
        }
    };
    let (spotlight, grid) = split_spotlight(projects);

    view! {
        <section id=Section::Portfolio.id() class="relative scroll-mt-16 bg-background py-20 md:py-32">
            <div class="section-divider via-violet/30"></div>
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <SectionReveal>
                    <h2 class="mb-4 text-center text-4xl font-bold text-foreground md:text-5xl">
                        "Selected Work"
                    </h2>
                    <p class="mx-auto mb-16 max-w-lg text-center text-muted">
                        "A collection of projects spanning full-stack applications, client sites, and developer tools."
                    </p>
                </SectionReveal>

                <div class="mb-16 flex flex-col gap-8">
                    {spotlight
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <SpotlightCard project index selected /> })
                        .collect_view()}
                </div>

                <SectionReveal>
                    <h3 class="mb-2 mt-8 text-3xl font-bold text-foreground">"More Projects"</h3>
                    <p class="mb-8 text-muted">"Client websites and additional work."</p>
                </SectionReveal>

                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {grid
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <GridCard project index selected /> })
                        .collect_view()}
                </div>
            </div>
            <ProjectDialog selected />
        </section>
    }
}

#[component]
fn Technologies(project: &'static Project, chip: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {project
                .technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class=format!("rounded-full border px-3 py-1 text-xs {chip}")>
                            {tech.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Source and live-site links. Clicking them must not open the dialog.
#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    let link = "text-sm text-subtle hover:text-foreground transition-colors duration-200";
    view! {
        <div class="flex gap-4">
            {project
                .source_url()
                .map(|url| {
                    view! {
                        <a
                            href=url.to_string()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link
                            on:click=|ev| ev.stop_propagation()
                        >
                            <i class="devicon-github-plain mr-1"></i>
                            "Source"
                        </a>
                    }
                })}
            {project
                .live_url()
                .map(|url| {
                    view! {
                        <a
                            href=url.to_string()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link
                            on:click=|ev| ev.stop_propagation()
                        >
                            "↗ Live Site"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn SpotlightCard(project: &'static Project, index: usize, selected: Selected) -> impl IntoView {
    let direction = if index % 2 == 0 {
        "md:flex-row"
    } else {
        "md:flex-row-reverse"
    };

    view! {
        <SectionReveal delay=0.1>
            <article
                class=format!(
                    "glass-card flex cursor-pointer flex-col overflow-hidden transition-all duration-500 hover:-translate-y-1 hover:border-violet/30 hover:shadow-[0_16px_60px_rgba(124,58,237,0.12)] {direction}",
                )
                on:click=move |_| selected.set(Some(project))
            >
                <div class="relative min-h-[220px] flex-none overflow-hidden md:min-h-[320px] md:basis-[55%]">
                    <ProjectPreview project />
                </div>
                <div class="flex flex-1 flex-col justify-center p-6 md:p-10">
                    <h3 class="mb-3 text-3xl font-bold text-foreground">{project.title.clone()}</h3>
                    <p class="mb-6 leading-relaxed text-muted">{project.description.clone()}</p>
                    <div class="mb-6">
                        <Technologies
                            project
                            chip="bg-gradient-to-br from-violet/10 to-blue/10 text-violet-light border-violet/20"
                        />
                    </div>
                    <ProjectLinks project />
                </div>
            </article>
        </SectionReveal>
    }
}

#[component]
fn GridCard(project: &'static Project, index: usize, selected: Selected) -> impl IntoView {
    view! {
        <SectionReveal delay=stagger(index, GRID_STAGGER) class="h-full">
            <article
                class="glass-card flex h-full cursor-pointer flex-col overflow-hidden transition-all duration-300 hover:-translate-y-1 hover:border-blue/30 hover:shadow-[0_12px_40px_rgba(59,130,246,0.1)]"
                on:click=move |_| selected.set(Some(project))
            >
                <ProjectPreview project />
                <div class="flex-grow p-6">
                    <h3 class="mb-2 text-lg font-semibold text-foreground">{project.title.clone()}</h3>
                    <p class="mb-4 text-sm leading-relaxed text-muted">{project.description.clone()}</p>
                    <Technologies project chip="bg-white/5 text-muted border-white/10" />
                </div>
                <div class="px-6 pb-5">
                    <ProjectLinks project />
                </div>
            </article>
        </SectionReveal>
    }
}

/// Full-size preview of the selected project. Closes on the close button,
/// a backdrop click or Escape.
#[component]
fn ProjectDialog(selected: Selected) -> impl IntoView {
    let close = move || selected.set(None);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            close();
        }
    });

    move || {
        selected.get().map(|project| {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm"
                    on:click=move |_| close()
                >
                    <div
                        role="dialog"
                        aria-modal="true"
                        aria-label=project.title.clone()
                        class="flex h-screen w-full flex-col overflow-hidden border border-white/10 bg-background/95 backdrop-blur-xl md:h-[90vh] md:max-w-[90vw] md:rounded-xl"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex items-center justify-between border-b border-white/5 p-4">
                            <h2 class="text-xl font-semibold text-foreground">{project.title.clone()}</h2>
                            <button
                                aria-label="close"
                                class="px-2 text-2xl text-subtle hover:text-foreground"
                                on:click=move |_| close()
                            >
                                "✕"
                            </button>
                        </div>
                        <ProjectPreview project full_screen=true />
                    </div>
                </div>
            }
        })
    }
}
