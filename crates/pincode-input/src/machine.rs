//! Navigation/completion state machine.
//!
//! The core of the control: a transition table over
//! `(environment, key, cell state)` producing the mutated cell state,
//! the view commands that realize focus movement, and the cell to
//! report as changed. The machine is pure over the model; it never
//! sees a rendering primitive, which is what makes the table directly
//! unit-testable.
//!
//! A keystroke runs two phases, mirroring the key-down/key-up split of
//! the host input layer:
//!
//! 1. **Classification** (key-down): decide whether the key inserts a
//!    character, erases, or is rejected outright. Rejection is silent;
//!    no error state exists anywhere in the control.
//! 2. **Commit** (key-up): apply the edit to the active cell and move
//!    focus.
//!
//! # Exempt keys
//!
//! Only Backspace and Delete survive the desktop digit filter. Tab,
//! back-tab, and the arrow keys are rejected like any other non-digit
//! key, so host focus traversal is suppressed while the control owns
//! the keyboard.

use pincode_core::Environment;
use pincode_core::event::{KeyCode, KeyEvent};

use crate::cell::CellBank;
use crate::view::ViewCommand;

/// Verdict of the key-down phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    /// Commit this character to the active cell.
    Insert(char),
    /// Backspace/Delete: clear in place, or walk back one cell.
    Erase,
    /// Suppressed. The commit phase does not run.
    Reject,
}

impl KeyAction {
    #[cfg(feature = "tracing")]
    pub(crate) const fn operation_name(self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Erase => "erase",
            Self::Reject => "reject",
        }
    }
}

/// Classify a keystroke.
///
/// `code_len_now` is the current sync-field length, `code_len_max` the
/// configured code length. Both matter only for the touch overflow
/// check: the merged cell has no native max-length, so overflow is
/// stopped here.
pub(crate) fn classify(
    env: Environment,
    key: &KeyEvent,
    code_len_now: usize,
    code_len_max: usize,
) -> KeyAction {
    match key.code {
        KeyCode::Backspace | KeyCode::Delete => KeyAction::Erase,
        KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
            if env.is_touch() {
                // No character filter on touch; the host's numeric
                // input mode shapes the keyboard instead.
                if code_len_now >= code_len_max {
                    KeyAction::Reject
                } else {
                    KeyAction::Insert(c)
                }
            } else if c.is_ascii_digit() {
                KeyAction::Insert(c)
            } else {
                KeyAction::Reject
            }
        }
        _ => KeyAction::Reject,
    }
}

/// Result of the commit phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    /// Index of the cell to report in the `change` notification.
    pub(crate) changed: usize,
    /// Whether a character was committed (drives the touch blur).
    pub(crate) inserted: bool,
    /// Focus movement for the rendering layer, in application order.
    pub(crate) commands: Vec<ViewCommand>,
}

/// Apply a classified keystroke to the registry.
///
/// `active` is the focused cell index and is updated in place when
/// focus moves. A `Reject` action produces an empty transition; the
/// widget short-circuits before calling this, but the no-op keeps the
/// table total.
pub(crate) fn commit(bank: &mut CellBank, active: &mut usize, action: KeyAction) -> Transition {
    match action {
        KeyAction::Erase => {
            let mut commands = Vec::new();
            if bank.is_cell_empty(*active) && *active > 0 {
                // Walk back: select and clear the previous cell. That
                // previous cell is the one reported as changed.
                *active -= 1;
                commands.push(ViewCommand::Select(*active));
                commands.push(ViewCommand::Focus(*active));
            }
            bank.clear_cell(*active);
            Transition {
                changed: *active,
                inserted: false,
                commands,
            }
        }
        KeyAction::Insert(c) => {
            bank.commit_char(*active, c);
            let changed = *active;
            let mut commands = Vec::new();
            if !bank.is_cell_empty(changed) && *active + 1 < bank.len() {
                *active += 1;
                commands.push(ViewCommand::Select(*active));
                commands.push(ViewCommand::Focus(*active));
            }
            Transition {
                changed,
                inserted: true,
                commands,
            }
        }
        KeyAction::Reject => Transition {
            changed: *active,
            inserted: false,
            commands: Vec::new(),
        },
    }
}
