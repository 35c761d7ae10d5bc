//! Notifications and the error region.
//!
//! Calling code observes the control through three optional hooks:
//! `keydown` on every key (accepted or not, after validation),
//! `change` after every accepted key-up, and `complete` whenever the
//! code is fully entered. `complete` receives the error region so the
//! caller, which alone knows whether the completed code is actually
//! correct, can populate it; the control itself never writes there.

use std::fmt;

use pincode_core::event::KeyEvent;

/// Payload of the `change` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotice {
    /// Index of the cell whose value changed.
    pub cell: usize,
    /// That cell's current value after the change.
    pub value: String,
    /// 1-based position of the changed cell. Always 1 in touch mode.
    pub position: usize,
}

/// Payload of the `complete` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteNotice {
    /// The fully entered code.
    pub value: String,
    /// The keystroke that completed it.
    pub event: KeyEvent,
}

/// Advisory text region next to the control.
///
/// Written only by calling code (typically from the `complete` hook
/// after a server-side check); the control only ever exposes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRegion {
    text: String,
}

impl ErrorRegion {
    /// Replace the region's text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empty the region.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the region is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub(crate) type KeydownHook = Box<dyn FnMut(&KeyEvent)>;
pub(crate) type ChangeHook = Box<dyn FnMut(&ChangeNotice)>;
pub(crate) type CompleteHook = Box<dyn FnMut(&CompleteNotice, &mut ErrorRegion)>;

/// Registered notification hooks.
#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) keydown: Option<KeydownHook>,
    pub(crate) change: Option<ChangeHook>,
    pub(crate) complete: Option<CompleteHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("keydown", &self.keydown.is_some())
            .field("change", &self.change.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_region_round_trip() {
        let mut region = ErrorRegion::default();
        assert!(region.is_empty());
        region.set("code not correct");
        assert_eq!(region.text(), "code not correct");
        region.clear();
        assert!(region.is_empty());
    }

    #[test]
    fn hooks_debug_reports_registration() {
        let mut hooks = Hooks::default();
        hooks.change = Some(Box::new(|_| {}));
        let repr = format!("{hooks:?}");
        assert!(repr.contains("change: true"));
        assert!(repr.contains("keydown: false"));
    }
}
