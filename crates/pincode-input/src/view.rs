//! View-update commands.
//!
//! The state machine never touches a rendering primitive. Each event
//! produces an ordered list of commands for the rendering layer to
//! apply to its input widgets after the model has settled.

/// One instruction for the rendering layer, addressed by cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Move input focus to the cell.
    Focus(usize),
    /// Select the cell's current content.
    Select(usize),
    /// Drop focus from the cell (touch hosts close the virtual
    /// keyboard on this).
    Blur(usize),
}
