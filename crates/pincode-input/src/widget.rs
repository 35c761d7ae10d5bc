//! The mounted pincode control.
//!
//! [`PinCode`] owns the cell registry, the sync field, the optional
//! autofill guard, the error region, and the registered hooks, and
//! drives the state machine for every host event. All state settles
//! synchronously inside [`PinCode::handle_event`] before control
//! returns to the host's event loop; the sync field and registry are
//! never mid-update between events.

use pincode_core::Environment;
use pincode_core::event::{Event, KeyEvent, KeyEventKind};

use crate::cell::{Cell, CellBank};
use crate::config::{ConfigError, PinCodeConfig};
use crate::guard::AutofillGuard;
use crate::hooks::{ChangeNotice, CompleteNotice, ErrorRegion, Hooks};
use crate::machine::{self, KeyAction};
use crate::sync::SyncField;
use crate::view::ViewCommand;

/// Mask glyph used when digits are hidden.
const MASK: char = '\u{2022}';

/// A segmented PIN-code entry control.
///
/// Construct with [`PinCode::new`], feed it [`Event`]s, and apply the
/// returned [`ViewCommand`]s in order. The sync field exposed by
/// [`PinCode::value`] is the only externally durable state and the
/// control is its only writer; external code resets it solely through
/// [`PinCode::clear`].
#[derive(Debug)]
pub struct PinCode {
    config: PinCodeConfig,
    env: Environment,
    cells: CellBank,
    sync: SyncField,
    guard: Option<AutofillGuard>,
    error: ErrorRegion,
    hooks: Hooks,
    active: usize,
    disabled: bool,
}

impl PinCode {
    /// Build a control from its configuration and environment.
    ///
    /// The environment is consulted once, here, and never again.
    /// Prefill from `config.value` applies only when digit hiding is
    /// off and the value is non-empty.
    pub fn new(config: PinCodeConfig, env: Environment) -> Result<Self, ConfigError> {
        config.validate()?;

        let prefill =
            (!config.hide_digits && !config.value.is_empty()).then_some(config.value.as_str());
        let cells = CellBank::build(env, config.inputs, config.placeholders.as_deref(), prefill);
        let mut sync = SyncField::new();
        sync.rebuild(&cells);
        let guard = config.hide_digits.then(AutofillGuard::new);

        Ok(Self {
            config,
            env,
            cells,
            sync,
            guard,
            error: ErrorRegion::default(),
            hooks: Hooks::default(),
            active: 0,
            disabled: false,
        })
    }

    // --- Hook registration ---

    /// Invoked on every key-down, after internal validation, whether
    /// or not the key was accepted.
    pub fn on_keydown(&mut self, hook: impl FnMut(&KeyEvent) + 'static) {
        self.hooks.keydown = Some(Box::new(hook));
    }

    /// Invoked after every accepted key-up with the changed cell.
    pub fn on_change(&mut self, hook: impl FnMut(&ChangeNotice) + 'static) {
        self.hooks.change = Some(Box::new(hook));
    }

    /// Invoked whenever the code is fully entered. Level-triggered:
    /// fires on every qualifying keystroke, not once per completion.
    pub fn on_complete(&mut self, hook: impl FnMut(&CompleteNotice, &mut ErrorRegion) + 'static) {
        self.hooks.complete = Some(Box::new(hook));
    }

    // --- Event handling ---

    /// Drive one host event through the state machine.
    ///
    /// Returns the view commands to apply, in order. Key releases,
    /// focus loss, and all events on a disabled control produce none.
    pub fn handle_event(&mut self, event: &Event) -> Vec<ViewCommand> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            // Select-on-focus: typing over a filled cell replaces it.
            Event::Focus(true) if !self.disabled => vec![ViewCommand::Select(self.active)],
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Vec<ViewCommand> {
        if self.disabled {
            return Vec::new();
        }

        // Key-down phase. The guard mutates first, unconditionally;
        // the keydown hook fires last, after validation, regardless of
        // the verdict.
        if let Some(guard) = self.guard.as_mut() {
            guard.neutralize();
        }
        let action = machine::classify(self.env, key, self.sync.grapheme_len(), self.config.inputs);
        if let Some(hook) = self.hooks.keydown.as_mut() {
            hook(key);
        }
        if action == KeyAction::Reject {
            #[cfg(feature = "tracing")]
            self.trace_transition(action.operation_name());
            return Vec::new();
        }

        // Key-up phase: commit, then a full sync-field rebuild.
        let transition = machine::commit(&mut self.cells, &mut self.active, action);
        self.sync.rebuild(&self.cells);

        #[cfg(feature = "tracing")]
        self.trace_transition(action.operation_name());

        if self.is_complete() {
            let notice = CompleteNotice {
                value: self.sync.value().to_owned(),
                event: *key,
            };
            if let Some(hook) = self.hooks.complete.as_mut() {
                hook(&notice, &mut self.error);
            }
        }

        let notice = ChangeNotice {
            cell: transition.changed,
            value: self
                .cells
                .get(transition.changed)
                .map(|c| c.value().to_owned())
                .unwrap_or_default(),
            position: transition.changed + 1,
        };
        if let Some(hook) = self.hooks.change.as_mut() {
            hook(&notice);
        }

        let mut commands = transition.commands;
        // Cosmetic on touch: defocus once the code is full so the
        // virtual keyboard closes.
        if self.env.is_touch()
            && transition.inserted
            && self.sync.grapheme_len() == self.config.inputs
        {
            commands.push(ViewCommand::Blur(self.active));
        }
        commands
    }

    // --- Public operations ---

    /// Re-enable keystroke handling on every cell.
    pub fn enable(&mut self) {
        self.disabled = false;
        self.cells.set_all_disabled(false);
    }

    /// Disable every cell; disabled cells accept no keystrokes.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.cells.set_all_disabled(true);
    }

    /// Select and focus the first cell.
    ///
    /// Used for initial placement or programmatic re-focus after an
    /// external error. No-op while disabled.
    pub fn focus(&mut self) -> Vec<ViewCommand> {
        if self.disabled {
            return Vec::new();
        }
        self.active = 0;
        vec![ViewCommand::Select(0), ViewCommand::Focus(0)]
    }

    /// Empty every cell and rebuild the sync field.
    ///
    /// Unlike a user keystroke this fires neither `change` nor
    /// `complete`, and it does not refocus.
    pub fn clear(&mut self) {
        self.cells.clear_all();
        self.sync.rebuild(&self.cells);
    }

    // --- Accessors ---

    /// The mirrored code value: exactly the characters typed, in cell
    /// order, with no separators.
    #[must_use]
    pub fn value(&self) -> &str {
        self.sync.value()
    }

    /// Whether the code is fully entered: every cell non-empty on
    /// desktop, full length on touch.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.env.is_touch() {
            self.sync.grapheme_len() == self.config.inputs
        } else {
            self.cells.all_filled()
        }
    }

    /// The cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.cells.cells()
    }

    /// Per-cell display strings: masked when digits are hidden.
    #[must_use]
    pub fn display_values(&self) -> Vec<String> {
        self.cells
            .cells()
            .iter()
            .map(|cell| {
                if self.config.hide_digits {
                    MASK.to_string().repeat(cell.grapheme_len())
                } else {
                    cell.value().to_owned()
                }
            })
            .collect()
    }

    /// The decoy field, present when digits are hidden.
    #[must_use]
    pub fn guard(&self) -> Option<&AutofillGuard> {
        self.guard.as_ref()
    }

    /// The advisory error region.
    #[must_use]
    pub fn error_region(&self) -> &ErrorRegion {
        &self.error
    }

    /// Mutable access to the advisory error region.
    pub fn error_region_mut(&mut self) -> &mut ErrorRegion {
        &mut self.error
    }

    /// The environment the control was built for.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.env
    }

    /// The configuration the control was built from.
    #[must_use]
    pub fn config(&self) -> &PinCodeConfig {
        &self.config
    }

    /// Index of the currently active cell.
    #[must_use]
    pub fn active_cell(&self) -> usize {
        self.active
    }

    #[cfg(feature = "tracing")]
    fn trace_transition(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "pincode.transition",
            operation,
            active_cell = self.active,
            code_len = self.sync.grapheme_len(),
            complete = self.is_complete()
        )
        .entered();
    }
}
