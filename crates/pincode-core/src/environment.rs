//! Host environment classification.
//!
//! The control behaves differently on touch hosts (one merged cell
//! accepting the whole code, no per-cell max-length) and desktop hosts
//! (one single-character cell per code position). The classification is
//! computed once at construction and never re-evaluated.
//!
//! Tests and embedders inject the flag directly via
//! [`Environment::touch`] / [`Environment::desktop`]; hosts that carry
//! a browser-style user-agent string can use
//! [`Environment::from_user_agent`].

/// Whether the host is a touch device or a desktop.
///
/// A plain capability flag: no probing, no retries, and absence of any
/// touch signal defaults to desktop behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Environment {
    touch: bool,
}

/// User-agent fragments that classify a host as touch.
///
/// Sniffing is a blunt instrument, but it matches the observed devices
/// in practice; anything unmatched falls back to desktop.
const TOUCH_AGENT_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

impl Environment {
    /// A touch host: one merged cell holds the whole code.
    #[must_use]
    pub const fn touch() -> Self {
        Self { touch: true }
    }

    /// A desktop host: one single-character cell per code position.
    #[must_use]
    pub const fn desktop() -> Self {
        Self { touch: false }
    }

    /// Classify from a user-agent string.
    ///
    /// Case-insensitive substring match against the known touch-device
    /// markers. An empty or unrecognized string yields desktop.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let touch = TOUCH_AGENT_MARKERS.iter().any(|m| ua.contains(m));
        Self { touch }
    }

    /// Whether this host was classified as touch.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        self.touch
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_flags() {
        assert!(Environment::touch().is_touch());
        assert!(!Environment::desktop().is_touch());
        assert!(!Environment::default().is_touch());
    }

    #[test]
    fn user_agent_touch_devices() {
        let agents = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 13; Pixel 7)",
            "Mozilla/5.0 (iPad; CPU OS 15_0 like Mac OS X)",
            "Opera Mini/7.1",
            "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900)",
        ];
        for ua in agents {
            assert!(Environment::from_user_agent(ua).is_touch(), "{ua}");
        }
    }

    #[test]
    fn user_agent_desktop_fallback() {
        let agents = [
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/126.0",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
            "",
        ];
        for ua in agents {
            assert!(!Environment::from_user_agent(ua).is_touch(), "{ua:?}");
        }
    }

    #[test]
    fn user_agent_match_is_case_insensitive() {
        assert!(Environment::from_user_agent("ANDROID 13").is_touch());
        assert!(Environment::from_user_agent("IeMoBiLe").is_touch());
    }
}
