mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod navigation;
mod portfolio;
mod preview;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site;

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use navigation::NavContext;
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background font-sans text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    NavContext::provide();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", site::OWNER) />
        <Meta name="description" content=format!("{} - {}", site::OWNER, site::HEADLINE) />

        <Router>
            <Header />
            <main class="flex flex-col">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The whole site is one scrolling page of anchored sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Portfolio />
        <Contact />
    }
}
