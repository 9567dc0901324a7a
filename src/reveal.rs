//! One-shot entrance animations for content scrolled into view.

pub const REVEAL_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Stagger between sibling cards in a grid.
pub const GRID_STAGGER: f64 = 0.1;
/// Stagger between the about/skills cards.
pub const CARD_STAGGER: f64 = 0.15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feeds one visibility sample. Returns `true` exactly once, on the first
    /// intersecting sample; the state never goes back to pending.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Pending {
            *self = RevealState::Revealed;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Parameters of a fade-up transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// Seconds to wait before the transition starts.
    pub delay: f64,
    pub duration: f64,
    /// Initial downward offset in pixels.
    pub offset: f64,
    /// How far inside the viewport (px) an element must be before it counts.
    pub margin: u32,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.7,
            offset: 40.0,
            margin: 60,
        }
    }
}

impl Reveal {
    /// The hero's on-load cascade: slightly shorter travel, slower fade.
    pub fn entrance() -> Self {
        Self {
            duration: 0.8,
            offset: 30.0,
            ..Self::default()
        }
    }

    pub fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn margin(self, margin: u32) -> Self {
        Self { margin, ..self }
    }

    /// `rootMargin` for the intersection observer; shrinks the viewport on
    /// every side.
    pub fn root_margin(&self) -> String {
        format!("-{}px", self.margin)
    }

    /// Inline style for the element in the given state.
    pub fn style(&self, state: RevealState) -> String {
        let transition = format!(
            "transition: opacity {d:.2}s {e} {delay:.2}s, transform {d:.2}s {e} {delay:.2}s",
            d = self.duration,
            e = REVEAL_EASING,
            delay = self.delay,
        );
        match state {
            RevealState::Pending => format!(
                "opacity: 0; transform: translateY({}px); {transition}",
                self.offset
            ),
            RevealState::Revealed => format!("opacity: 1; transform: none; {transition}"),
        }
    }
}

/// Delay of the `index`th sibling in a cascade.
pub fn stagger(index: usize, increment: f64) -> f64 {
    index as f64 * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());

        // enter, leave, re-enter
        let fired = [true, false, true, true]
            .into_iter()
            .filter(|visible| state.observe(*visible))
            .count();
        assert_eq!(fired, 1);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, GRID_STAGGER), 0.0);
        assert!((stagger(3, GRID_STAGGER) - 0.3).abs() < 1e-9);
        assert!((stagger(2, CARD_STAGGER) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_style() {
        let reveal = Reveal::default().delay(stagger(3, GRID_STAGGER));
        let pending = reveal.style(RevealState::Pending);
        assert!(pending.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(pending.contains("0.70s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.30s"));

        let revealed = reveal.style(RevealState::Revealed);
        assert!(revealed.starts_with("opacity: 1; transform: none;"));

        let hero = Reveal::entrance().style(RevealState::Pending);
        assert!(hero.contains("translateY(30px)"));
        assert!(hero.contains("opacity 0.80s"));
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(Reveal::default().root_margin(), "-60px");
        assert_eq!(Reveal::default().margin(80).root_margin(), "-80px");
    }
}
