pub mod about;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod nav;
pub mod preview;
pub mod projects;
pub mod reveal;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a second init (e.g. hot reload) is harmless
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
