//! Scroll-synchronised navigation state.
//!
//! Everything here is independent of the DOM. The browser glue in
//! `app::header` implements [`Viewport`] on top of `web_sys` and feeds scroll
//! events into a [`ScrollTracker`], which keeps a [`NavigationState`] in sync.

use std::fmt;

/// Offset past which the header switches to its elevated (opaque) style.
pub const ELEVATION_THRESHOLD: f64 = 50.0;
/// How far below the scroll position a section may start and still count as active.
pub const ACTIVE_LOOKAHEAD: f64 = 150.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    /// Sections in document order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Id of the anchor element rendered for this section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Portfolio => "Work",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Measurements and scrolling the navigation logic needs from the page.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Document offset of the top of `section`, or `None` while its anchor
    /// is not mounted.
    fn section_top(&self, section: Section) -> Option<f64>;

    /// Smooth-scroll so that the section's top aligns with the viewport top.
    /// Returns `false` when the anchor does not exist.
    fn scroll_to(&self, section: Section) -> bool;
}

pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > ELEVATION_THRESHOLD
}

/// The last section (in document order) starting at or above
/// `scroll_y + ACTIVE_LOOKAHEAD`. The scan stops at the first unmounted
/// section, so the active section never advances past it until it mounts. If
/// nothing qualifies the hero stays active.
pub fn active_section<F>(scroll_y: f64, section_top: F) -> Section
where
    F: Fn(Section) -> Option<f64>,
{
    let threshold = scroll_y + ACTIVE_LOOKAHEAD;
    Section::ALL
        .into_iter()
        .map_while(|section| section_top(section).map(|top| (section, top)))
        .filter(|(_, top)| *top <= threshold)
        .last()
        .map(|(section, _)| section)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub elevated: bool,
    pub drawer_open: bool,
}

impl NavigationState {
    /// Re-derives `active` and `elevated` from the viewport. Returns whether
    /// anything changed so callers can skip redundant notifications.
    pub fn sample<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let scroll_y = viewport.scroll_y();
        let active = active_section(scroll_y, |section| viewport.section_top(section));
        let elevated = is_elevated(scroll_y);
        let changed = active != self.active || elevated != self.elevated;
        self.active = active;
        self.elevated = elevated;
        changed
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Returns `true` only if the drawer was open.
    pub fn close_drawer(&mut self) -> bool {
        std::mem::replace(&mut self.drawer_open, false)
    }

    /// Scrolls to `section` and closes the drawer as part of the same action.
    /// A missing anchor is not an error: nothing scrolls and `false` is
    /// returned.
    pub fn navigate_to<V: Viewport + ?Sized>(&mut self, section: Section, viewport: &V) -> bool {
        self.close_drawer();
        let scrolled = viewport.scroll_to(section);
        if !scrolled {
            log::debug!("navigation target #{section} is not mounted");
        }
        scrolled
    }
}

/// Coalesces scroll events so the page is measured at most once per
/// animation frame.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    frame_pending: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll event. Returns `true` when the caller must
    /// schedule a frame; further events are absorbed until that frame runs.
    pub fn on_scroll(&mut self) -> bool {
        !std::mem::replace(&mut self.frame_pending, true)
    }

    /// Called from the scheduled frame. Returns whether `state` changed.
    pub fn on_frame<V: Viewport + ?Sized>(
        &mut self,
        state: &mut NavigationState,
        viewport: &V,
    ) -> bool {
        self.frame_pending = false;
        state.sample(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeViewport {
        scroll_y: Cell<f64>,
        tops: [Option<f64>; 4],
        scrolled_to: RefCell<Vec<Section>>,
    }

    impl FakeViewport {
        fn new(tops: [Option<f64>; 4]) -> Self {
            Self {
                scroll_y: Cell::new(0.0),
                tops,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }

        fn standard() -> Self {
            Self::new([Some(0.0), Some(900.0), Some(1800.0), Some(3200.0)])
        }

        fn index(section: Section) -> usize {
            Section::ALL
                .iter()
                .position(|s| *s == section)
                .expect("section should be listed")
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn section_top(&self, section: Section) -> Option<f64> {
            self.tops[Self::index(section)]
        }

        fn scroll_to(&self, section: Section) -> bool {
            let Some(top) = self.section_top(section) else {
                return false;
            };
            self.scrolled_to.borrow_mut().push(section);
            self.scroll_y.set(top);
            true
        }
    }

    #[test]
    fn test_elevation_boundary() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(49.0));
        assert!(!is_elevated(50.0));
        assert!(is_elevated(51.0));
        assert!(is_elevated(50.5));
    }

    #[test]
    fn test_active_section_last_match_wins() {
        let vp = FakeViewport::standard();
        let top = |s: Section| vp.section_top(s);
        assert_eq!(active_section(0.0, top), Section::Hero);
        // 900 <= 750 + 150
        assert_eq!(active_section(750.0, top), Section::About);
        assert_eq!(active_section(749.0, top), Section::Hero);
        assert_eq!(active_section(1700.0, top), Section::Portfolio);
        assert_eq!(active_section(10_000.0, top), Section::Contact);
    }

    #[test]
    fn test_active_section_defaults_to_hero() {
        let vp = FakeViewport::new([None, Some(900.0), Some(1800.0), Some(3200.0)]);
        assert_eq!(active_section(0.0, |s| vp.section_top(s)), Section::Hero);

        let nothing_mounted = FakeViewport::new([None; 4]);
        assert_eq!(
            active_section(5000.0, |s| nothing_mounted.section_top(s)),
            Section::Hero
        );
    }

    #[test]
    fn test_unmounted_section_blocks_later_sections() {
        let vp = FakeViewport::new([Some(0.0), Some(900.0), None, Some(3200.0)]);
        let top = |s: Section| vp.section_top(s);
        assert_eq!(active_section(2000.0, top), Section::About);
        assert_eq!(active_section(3100.0, top), Section::About);
        assert_eq!(active_section(10_000.0, top), Section::About);

        let mounted = FakeViewport::standard();
        assert_eq!(active_section(3100.0, |s| mounted.section_top(s)), Section::Contact);
    }

    #[test]
    fn test_active_section_is_monotonic() {
        let vp = FakeViewport::standard();
        let mut previous = Section::Hero;
        let mut y = 0.0;
        while y < 5000.0 {
            let current = active_section(y, |s| vp.section_top(s));
            assert!(current >= previous, "jumped back from {previous} to {current} at {y}");
            previous = current;
            y += 7.0;
        }
        assert_eq!(previous, Section::Contact);
    }

    #[test]
    fn test_sample_reports_changes_only() {
        let vp = FakeViewport::standard();
        let mut state = NavigationState::default();
        assert!(!state.sample(&vp));

        vp.scroll_y.set(51.0);
        assert!(state.sample(&vp));
        assert!(state.elevated);
        assert_eq!(state.active, Section::Hero);

        vp.scroll_y.set(60.0);
        assert!(!state.sample(&vp));

        vp.scroll_y.set(1000.0);
        assert!(state.sample(&vp));
        assert_eq!(state.active, Section::About);

        vp.scroll_y.set(49.0);
        assert!(state.sample(&vp));
        assert!(!state.elevated);
        assert_eq!(state.active, Section::Hero);
    }

    #[test]
    fn test_navigate_closes_drawer() {
        let vp = FakeViewport::standard();
        let mut state = NavigationState::default();
        state.toggle_drawer();
        assert!(state.drawer_open);

        assert!(state.navigate_to(Section::Contact, &vp));
        assert!(!state.drawer_open);
        assert_eq!(*vp.scrolled_to.borrow(), vec![Section::Contact]);

        state.sample(&vp);
        assert_eq!(state.active, Section::Contact);
    }

    #[test]
    fn test_navigate_to_missing_anchor_is_noop() {
        let vp = FakeViewport::new([Some(0.0), Some(900.0), Some(1800.0), None]);
        let mut state = NavigationState::default();
        assert!(!state.navigate_to(Section::Contact, &vp));
        assert!(vp.scrolled_to.borrow().is_empty());
        assert_eq!(vp.scroll_y(), 0.0);
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_close_drawer_is_idempotent() {
        let mut state = NavigationState {
            drawer_open: true,
            ..Default::default()
        };
        assert!(state.close_drawer());
        assert!(!state.drawer_open);
        assert!(!state.close_drawer());
        assert!(!state.drawer_open);

        state.toggle_drawer();
        state.toggle_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_tracker_coalesces_scroll_events() {
        let vp = FakeViewport::standard();
        let mut state = NavigationState::default();
        let mut tracker = ScrollTracker::new();

        assert!(tracker.on_scroll());
        assert!(!tracker.on_scroll());
        assert!(!tracker.on_scroll());

        vp.scroll_y.set(2000.0);
        assert!(tracker.on_frame(&mut state, &vp));
        assert_eq!(state.active, Section::Portfolio);

        assert!(tracker.on_scroll());
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<String> = Section::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["hero", "about", "portfolio", "contact"]);
    }
}
