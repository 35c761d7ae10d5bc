//! Autofill guard.
//!
//! A write-only decoy field mounted before the real cells when digits
//! are hidden. Browsers treat a leading numeric field as the
//! credential to save; mutating its kind and wiping its value on every
//! keystroke keeps their save heuristics from ever seeing a stable
//! password candidate. The guard is never read for value and has no
//! state machine of its own.

/// Field kind presented to the host for the decoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardFieldKind {
    /// Initial kind, what a credential heuristic latches onto.
    Number,
    /// Neutralized kind.
    Text,
}

/// The decoy field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillGuard {
    kind: GuardFieldKind,
    value: String,
}

impl AutofillGuard {
    /// Create the guard in its mounted state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: GuardFieldKind::Number,
            value: String::new(),
        }
    }

    /// Flip the field kind to plain text and wipe the value.
    ///
    /// Runs on every keystroke delivered to a real cell, before
    /// validation and regardless of the key's validity.
    pub(crate) fn neutralize(&mut self) {
        self.kind = GuardFieldKind::Text;
        self.value.clear();
    }

    /// Current field kind for the rendering layer.
    #[must_use]
    pub const fn kind(&self) -> GuardFieldKind {
        self.kind
    }

    /// Current (always empty after any keystroke) value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for AutofillGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_numeric_and_empty() {
        let guard = AutofillGuard::new();
        assert_eq!(guard.kind(), GuardFieldKind::Number);
        assert!(guard.value().is_empty());
    }

    #[test]
    fn neutralize_flips_kind_and_wipes_value() {
        let mut guard = AutofillGuard::new();
        guard.value = "1234".to_owned();
        guard.neutralize();
        assert_eq!(guard.kind(), GuardFieldKind::Text);
        assert!(guard.value().is_empty());
    }

    #[test]
    fn neutralize_is_idempotent() {
        let mut guard = AutofillGuard::new();
        guard.neutralize();
        guard.neutralize();
        assert_eq!(guard.kind(), GuardFieldKind::Text);
    }
}
