use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::nav::{NavigationState, Section, Viewport};

/// [`Viewport`] backed by the live document. Browser only: call it from
/// event handlers, effects or animation frames, never while rendering.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_top(&self, section: Section) -> Option<f64> {
        let el = document().get_element_by_id(section.id())?;
        Some(el.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn scroll_to(&self, section: Section) -> bool {
        let Some(el) = document().get_element_by_id(section.id()) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

/// Page-wide navigation state shared through context.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    state: RwSignal<NavigationState>,
}

impl NavContext {
    pub fn provide() -> Self {
        let ctx = Self {
            state: RwSignal::new(NavigationState::default()),
        };
        provide_context(ctx);
        ctx
    }

    pub fn active(&self) -> Section {
        self.state.with(|s| s.active)
    }

    pub fn elevated(&self) -> bool {
        self.state.with(|s| s.elevated)
    }

    pub fn drawer_open(&self) -> bool {
        self.state.with(|s| s.drawer_open)
    }

    pub fn navigate(&self, section: Section) {
        self.apply(|s| {
            s.navigate_to(section, &DomViewport);
        });
    }

    pub fn toggle_drawer(&self) {
        self.apply(NavigationState::toggle_drawer);
    }

    pub fn close_drawer(&self) {
        self.apply(|s| {
            s.close_drawer();
        });
    }

    /// Runs `f` on a copy of the state and only notifies subscribers when
    /// something actually changed.
    pub fn apply(&self, f: impl FnOnce(&mut NavigationState)) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let mut next = current;
        f(&mut next);
        if next != current {
            self.state.set(next);
        }
    }
}
