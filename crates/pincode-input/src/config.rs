//! Construction configuration for the pincode control.
//!
//! Mirrors the recognized options of the control: cell count,
//! per-cell placeholders, digit hiding, an initial value, and the
//! passthrough attributes the rendering layer forwards verbatim to its
//! input primitives. The core never interprets the passthrough fields.

use std::fmt;

/// Configuration for [`PinCode::new`](crate::PinCode::new).
///
/// Builder methods consume and return the config so options chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCodeConfig {
    /// Number of logical cells, i.e. the code length. Default 4.
    pub inputs: usize,
    /// Space-delimited per-cell placeholder text.
    pub placeholders: Option<String>,
    /// When true, cells display masked instead of showing the digit.
    pub hide_digits: bool,
    /// Initial value. Applied only when `hide_digits` is false and the
    /// value is non-empty; characters beyond `inputs` are dropped.
    pub value: String,
    /// Passthrough `pattern` attribute for the rendering layer.
    pub pattern: String,
    /// Passthrough input type for the rendering layer.
    pub input_type: String,
    /// Passthrough input mode for the rendering layer.
    pub input_mode: String,
}

impl Default for PinCodeConfig {
    fn default() -> Self {
        Self {
            inputs: 4,
            placeholders: None,
            hide_digits: true,
            value: String::new(),
            pattern: "[0-9]*".to_owned(),
            input_type: "number".to_owned(),
            input_mode: "numeric".to_owned(),
        }
    }
}

impl PinCodeConfig {
    /// Create the default configuration (4 hidden digit cells).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cells (builder).
    #[must_use]
    pub fn with_inputs(mut self, inputs: usize) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the space-delimited placeholder list (builder).
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: impl Into<String>) -> Self {
        self.placeholders = Some(placeholders.into());
        self
    }

    /// Set whether digits are hidden (builder).
    #[must_use]
    pub fn with_hide_digits(mut self, hide: bool) -> Self {
        self.hide_digits = hide;
        self
    }

    /// Set the initial value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the passthrough pattern attribute (builder).
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the passthrough input type (builder).
    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Set the passthrough input mode (builder).
    #[must_use]
    pub fn with_input_mode(mut self, input_mode: impl Into<String>) -> Self {
        self.input_mode = input_mode.into();
        self
    }

    /// Check the configuration for construction-time errors.
    ///
    /// Construction is the only fallible operation on the control;
    /// everything after it is infallible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs == 0 {
            return Err(ConfigError::ZeroCells);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A control with zero cells cannot hold a code.
    ZeroCells,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCells => write!(f, "pincode control needs at least one cell"),
        }
    }
}

impl std::error::Error for ConfigError {}
