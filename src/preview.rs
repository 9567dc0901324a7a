//! Live-site previews embedded in project cards.

use std::time::Duration;

use http::uri::{Scheme, Uri};

/// Capabilities granted to embedded sites. No top navigation, no plugins.
pub const PREVIEW_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";
pub const PREVIEW_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
/// A preview still loading after this long is replaced by its thumbnail.
pub const PREVIEW_TIMEOUT: Duration = Duration::from_secs(15);

/// Normalises a live-site URL for embedding: `http` is upgraded to `https`,
/// anything that is not an absolute http(s) URL is rejected. The fragment is
/// kept so hash-routed sites open on the same view.
pub fn secure_url(url: &str) -> Option<String> {
    // `Uri` has no fragment component
    let (target, fragment) = match url.trim().split_once('#') {
        Some((target, fragment)) => (target, Some(fragment)),
        None => (url.trim(), None),
    };
    let uri = target.parse::<Uri>().ok()?;
    uri.authority()?;
    let uri = match uri.scheme_str() {
        Some("https") => uri,
        Some("http") => {
            let mut parts = uri.into_parts();
            parts.scheme = Some(Scheme::HTTPS);
            Uri::from_parts(parts).ok()?
        }
        _ => return None,
    };
    Some(match fragment {
        Some(fragment) => format!("{uri}#{fragment}"),
        None => uri.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    Load,
    Error,
    Timeout,
}

/// What a preview card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Spinner only. The frame is not created until the card is mounted in
    /// the browser, so its `load` event cannot fire before a listener exists.
    Placeholder,
    Frame,
    Thumbnail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Loading,
    Loaded,
    /// Terminal: the thumbnail is shown and the embed is never retried.
    Fallback,
}

impl PreviewState {
    /// Projects without an embeddable URL go straight to the thumbnail.
    pub fn new(has_url: bool) -> Self {
        if has_url {
            PreviewState::Loading
        } else {
            PreviewState::Fallback
        }
    }

    pub fn on_event(self, event: PreviewEvent) -> Self {
        match (self, event) {
            (PreviewState::Fallback, _) => PreviewState::Fallback,
            (_, PreviewEvent::Error) => PreviewState::Fallback,
            (PreviewState::Loading, PreviewEvent::Load) => PreviewState::Loaded,
            (PreviewState::Loading, PreviewEvent::Timeout) => PreviewState::Fallback,
            (PreviewState::Loaded, _) => PreviewState::Loaded,
        }
    }

    pub fn shows_spinner(self) -> bool {
        self == PreviewState::Loading
    }

    pub fn shows_embed(self) -> bool {
        self != PreviewState::Fallback
    }

    pub fn surface(self, mounted: bool) -> Surface {
        match (self.shows_embed(), mounted) {
            (false, _) => Surface::Thumbnail,
            (true, false) => Surface::Placeholder,
            (true, true) => Surface::Frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_url_upgrades_http() {
        let url = secure_url("http://jcoatx.com").expect("http url should be accepted");
        assert!(url.starts_with("https://"));
        assert_eq!(url, "https://jcoatx.com/");

        assert_eq!(
            secure_url("http://example.com/menu?page=2").as_deref(),
            Some("https://example.com/menu?page=2")
        );
    }

    #[test]
    fn test_secure_url_keeps_https() {
        assert_eq!(
            secure_url("https://rabbitsrecipes.com/").as_deref(),
            Some("https://rabbitsrecipes.com/")
        );
        assert_eq!(
            secure_url("  https://budafuldoordecor.com/shop ").as_deref(),
            Some("https://budafuldoordecor.com/shop")
        );
    }

    #[test]
    fn test_secure_url_keeps_fragment() {
        assert_eq!(
            secure_url("http://example.com/#/projects").as_deref(),
            Some("https://example.com/#/projects")
        );
        assert_eq!(
            secure_url("https://example.com/app#demo").as_deref(),
            Some("https://example.com/app#demo")
        );
        assert_eq!(
            secure_url("http://example.com/menu?page=2#top").as_deref(),
            Some("https://example.com/menu?page=2#top")
        );
        assert_eq!(secure_url("#/projects"), None);
    }

    #[test]
    fn test_secure_url_rejects_other_targets() {
        assert_eq!(secure_url(""), None);
        assert_eq!(secure_url("#"), None);
        assert_eq!(secure_url("/relative/path"), None);
        assert_eq!(secure_url("ftp://files.example.com"), None);
        assert_eq!(secure_url("not a url"), None);
    }

    #[test]
    fn test_load_hides_spinner() {
        let state = PreviewState::new(true);
        assert!(state.shows_spinner());
        assert!(state.shows_embed());

        let state = state.on_event(PreviewEvent::Load);
        assert_eq!(state, PreviewState::Loaded);
        assert!(!state.shows_spinner());
        assert!(state.shows_embed());

        // a late timeout doesn't undo a successful load
        assert_eq!(state.on_event(PreviewEvent::Timeout), PreviewState::Loaded);
    }

    #[test]
    fn test_error_falls_back_to_thumbnail() {
        let state = PreviewState::new(true).on_event(PreviewEvent::Error);
        assert_eq!(state, PreviewState::Fallback);
        assert!(!state.shows_spinner());
        assert!(!state.shows_embed());
    }

    #[test]
    fn test_timeout_falls_back_to_thumbnail() {
        let state = PreviewState::new(true).on_event(PreviewEvent::Timeout);
        assert_eq!(state, PreviewState::Fallback);
    }

    #[test]
    fn test_fallback_is_terminal() {
        let mut state = PreviewState::new(true).on_event(PreviewEvent::Error);
        for event in [PreviewEvent::Load, PreviewEvent::Timeout, PreviewEvent::Error] {
            state = state.on_event(event);
            assert_eq!(state, PreviewState::Fallback);
        }
        assert_eq!(PreviewState::new(false), PreviewState::Fallback);
    }

    #[test]
    fn test_frame_waits_for_mount() {
        let state = PreviewState::new(true);
        assert_eq!(state.surface(false), Surface::Placeholder);
        assert!(state.shows_spinner());
        assert_eq!(state.surface(true), Surface::Frame);

        let loaded = state.on_event(PreviewEvent::Load);
        assert_eq!(loaded.surface(true), Surface::Frame);

        let fallback = state.on_event(PreviewEvent::Timeout);
        assert_eq!(fallback.surface(false), Surface::Thumbnail);
        assert_eq!(fallback.surface(true), Surface::Thumbnail);
        assert_eq!(PreviewState::new(false).surface(false), Surface::Thumbnail);
    }
}
