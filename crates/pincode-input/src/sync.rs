//! Sync field.
//!
//! The single hidden field mirroring the ordered concatenation of all
//! cell values. This is the only state other page code reads; the
//! control is its only writer. After any completed cell mutation the
//! field equals the concatenation exactly.

use unicode_segmentation::UnicodeSegmentation;

use crate::cell::CellBank;

/// The mirrored code value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncField {
    value: String,
}

impl SyncField {
    /// Create an empty sync field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the full registry.
    ///
    /// Always a full rebuild in index order; N is small, so no
    /// incremental path exists.
    pub(crate) fn rebuild(&mut self, bank: &CellBank) {
        self.value = bank.concat();
    }

    /// The mirrored value: the typed characters in cell order, no
    /// separators.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the mirrored value in graphemes.
    #[must_use]
    pub fn grapheme_len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Whether the mirrored value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
