use leptos::prelude::*;

use crate::{
    nav::Section,
    reveal::{stagger, GRID_STAGGER},
    site,
};

use super::reveal::SectionReveal;

#[component]
pub fn Contact() -> impl IntoView {
    let social = "rounded-full border border-white/10 p-3 text-xl text-subtle transition-all duration-200 hover:border-white/20 hover:bg-white/5 hover:text-foreground";

    view! {
        <section id=Section::Contact.id() class="relative scroll-mt-16 bg-background py-24 md:py-40">
            <div class="section-divider via-cyan/30"></div>
            <div class="mx-auto max-w-3xl px-4 text-center">
                <SectionReveal delay=stagger(0, GRID_STAGGER)>
                    <p class="mb-6 text-sm font-medium uppercase tracking-[0.2em] text-cyan">
                        "Get in Touch"
                    </p>
                </SectionReveal>
                <SectionReveal delay=stagger(1, GRID_STAGGER)>
                    <h2 class="mb-6 text-4xl font-bold text-foreground md:text-5xl">
                        "Let's Build Something"
                        <br />
                        <span class="gradient-text">"Together."</span>
                    </h2>
                </SectionReveal>
                <SectionReveal delay=stagger(2, GRID_STAGGER)>
                    <p class="mx-auto mb-10 max-w-lg leading-loose text-muted">
                        "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hello, my inbox is open."
                    </p>
                </SectionReveal>
                <SectionReveal delay=stagger(3, GRID_STAGGER)>
                    <a
                        href=site::mailto()
                        class="inline-block rounded-lg border border-white/15 px-10 py-4 font-semibold text-foreground transition-all duration-300 hover:-translate-y-0.5 hover:border-violet hover:bg-violet/10"
                    >
                        {site::EMAIL}
                        " ↗"
                    </a>
                </SectionReveal>
                <SectionReveal delay=stagger(4, GRID_STAGGER)>
                    <div class="mt-10 flex justify-center gap-4">
                        <a
                            href=site::GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class=social
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=site::LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class=social
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a href=site::mailto() class=social aria-label="Email">
                            "✉"
                        </a>
                    </div>
                </SectionReveal>
            </div>
        </section>
    }
}
