use leptos::prelude::*;

use crate::site;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/5 bg-background py-8">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-2 px-4 text-xs sm:flex-row">
                <p class="text-zinc-600">
                    {format!("© {} {}. All rights reserved.", site::BUILD_YEAR, site::OWNER)}
                </p>
                <p class="text-zinc-700">"Built with Rust & Leptos"</p>
            </div>
        </footer>
    }
}
