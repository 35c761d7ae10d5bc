//! Cell registry.
//!
//! The ordered sequence of input cells backing the control. On desktop
//! hosts there is one cell per code position, each holding at most one
//! grapheme; on touch hosts a single merged cell holds the whole code.
//! Which model applies is fixed at build time from the
//! [`Environment`] and never re-evaluated.
//!
//! Grapheme-cluster aware so that cell capacity counts what the user
//! perceives as characters.

use pincode_core::Environment;
use unicode_segmentation::UnicodeSegmentation;

/// Presentational position tag for a cell.
///
/// Index 0 is `First`, index N-1 is `Last`, everything between is
/// `Middle`. A lone cell is `First`. The tag carries no behavior; the
/// rendering layer uses it for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Leftmost cell.
    First,
    /// Any interior cell.
    Middle,
    /// Rightmost cell.
    Last,
}

/// One input slot holding part of the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    value: String,
    placeholder: Option<String>,
    role: CellRole,
    disabled: bool,
}

impl Cell {
    /// 0-based position of this cell. Immutable for the cell's life.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current value of this cell.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Placeholder text, if one was configured for this position.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Presentational role tag.
    #[must_use]
    pub const fn role(&self) -> CellRole {
        self.role
    }

    /// Whether the cell currently holds no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the cell is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Number of graphemes currently held.
    #[must_use]
    pub fn grapheme_len(&self) -> usize {
        self.value.graphemes(true).count()
    }
}

fn role_for(index: usize, count: usize) -> CellRole {
    if index == 0 {
        CellRole::First
    } else if index == count - 1 {
        CellRole::Last
    } else {
        CellRole::Middle
    }
}

/// Ordered registry of the control's cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBank {
    cells: Vec<Cell>,
    cell_capacity: usize,
}

impl CellBank {
    /// Build the registry for a code of `code_len` characters.
    ///
    /// Desktop: `code_len` cells with capacity one. Touch: a single
    /// merged cell with capacity `code_len`, whose placeholder is the
    /// placeholder list with the delimiting spaces removed.
    ///
    /// `prefill` distributes positionally; graphemes beyond `code_len`
    /// are dropped.
    #[must_use]
    pub fn build(
        env: Environment,
        code_len: usize,
        placeholders: Option<&str>,
        prefill: Option<&str>,
    ) -> Self {
        if env.is_touch() {
            let placeholder = placeholders
                .map(|p| p.replace(' ', ""))
                .filter(|p| !p.is_empty());
            let value = prefill
                .map(|v| {
                    v.graphemes(true)
                        .take(code_len)
                        .collect::<String>()
                })
                .unwrap_or_default();
            let cell = Cell {
                index: 0,
                value,
                placeholder,
                role: CellRole::First,
                disabled: false,
            };
            return Self {
                cells: vec![cell],
                cell_capacity: code_len,
            };
        }

        let placeholders: Vec<&str> = placeholders
            .map(|p| p.split(' ').collect())
            .unwrap_or_default();
        let prefill: Vec<&str> = prefill
            .map(|v| v.graphemes(true).collect())
            .unwrap_or_default();

        let cells = (0..code_len)
            .map(|index| Cell {
                index,
                value: prefill.get(index).map(ToString::to_string).unwrap_or_default(),
                placeholder: placeholders
                    .get(index)
                    .filter(|p| !p.is_empty())
                    .map(ToString::to_string),
                role: role_for(index, code_len),
                disabled: false,
            })
            .collect();

        Self {
            cells,
            cell_capacity: 1,
        }
    }

    /// Number of cells in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the registry holds no cells. Never true for a built bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ordered concatenation of all cell values.
    #[must_use]
    pub fn concat(&self) -> String {
        self.cells.iter().map(|c| c.value.as_str()).collect()
    }

    /// Whether every cell holds a non-empty value.
    #[must_use]
    pub fn all_filled(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Grapheme capacity of a single cell (1 on desktop, N on touch).
    #[must_use]
    pub(crate) const fn cell_capacity(&self) -> usize {
        self.cell_capacity
    }

    pub(crate) fn is_cell_empty(&self, index: usize) -> bool {
        self.cells.get(index).is_none_or(Cell::is_empty)
    }

    pub(crate) fn clear_cell(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.value.clear();
        }
    }

    /// Commit one character into the cell at `index`.
    ///
    /// A capacity-one cell is replaced (select-on-focus semantics); a
    /// merged cell appends while below capacity and otherwise drops the
    /// character.
    pub(crate) fn commit_char(&mut self, index: usize, c: char) {
        let capacity = self.cell_capacity;
        if let Some(cell) = self.cells.get_mut(index) {
            if capacity == 1 {
                cell.value = c.to_string();
            } else if cell.grapheme_len() < capacity {
                cell.value.push(c);
            }
        }
    }

    pub(crate) fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.value.clear();
        }
    }

    pub(crate) fn set_all_disabled(&mut self, disabled: bool) {
        for cell in &mut self.cells {
            cell.disabled = disabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_bank_has_one_cell_per_position() {
        let bank = CellBank::build(Environment::desktop(), 4, None, None);
        assert_eq!(bank.len(), 4);
        assert_eq!(bank.cell_capacity(), 1);
        assert!(bank.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn touch_bank_has_single_merged_cell() {
        let bank = CellBank::build(Environment::touch(), 4, None, None);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.cell_capacity(), 4);
    }

    #[test]
    fn roles_tag_first_mid_last() {
        let bank = CellBank::build(Environment::desktop(), 4, None, None);
        let roles: Vec<CellRole> = bank.cells().iter().map(Cell::role).collect();
        assert_eq!(
            roles,
            [
                CellRole::First,
                CellRole::Middle,
                CellRole::Middle,
                CellRole::Last
            ]
        );
    }

    #[test]
    fn lone_cell_is_first() {
        let bank = CellBank::build(Environment::desktop(), 1, None, None);
        assert_eq!(bank.get(0).unwrap().role(), CellRole::First);
    }

    #[test]
    fn placeholders_split_positionally() {
        let bank = CellBank::build(Environment::desktop(), 4, Some("a b"), None);
        assert_eq!(bank.get(0).unwrap().placeholder(), Some("a"));
        assert_eq!(bank.get(1).unwrap().placeholder(), Some("b"));
        assert_eq!(bank.get(2).unwrap().placeholder(), None);
        assert_eq!(bank.get(3).unwrap().placeholder(), None);
    }

    #[test]
    fn touch_placeholder_drops_delimiting_spaces() {
        let bank = CellBank::build(Environment::touch(), 4, Some("1 2 3 4"), None);
        assert_eq!(bank.get(0).unwrap().placeholder(), Some("1234"));
    }

    #[test]
    fn prefill_distributes_and_drops_excess() {
        let bank = CellBank::build(Environment::desktop(), 4, None, Some("123456"));
        let values: Vec<&str> = bank.cells().iter().map(Cell::value).collect();
        assert_eq!(values, ["1", "2", "3", "4"]);
        assert_eq!(bank.concat(), "1234");
    }

    #[test]
    fn prefill_shorter_than_bank_leaves_tail_empty() {
        let bank = CellBank::build(Environment::desktop(), 4, None, Some("12"));
        assert_eq!(bank.concat(), "12");
        assert!(bank.get(2).unwrap().is_empty());
        assert!(!bank.all_filled());
    }

    #[test]
    fn touch_prefill_truncates_to_code_len() {
        let bank = CellBank::build(Environment::touch(), 4, None, Some("123456"));
        assert_eq!(bank.get(0).unwrap().value(), "1234");
    }

    #[test]
    fn commit_replaces_on_desktop() {
        let mut bank = CellBank::build(Environment::desktop(), 4, None, None);
        bank.commit_char(0, '1');
        bank.commit_char(0, '9');
        assert_eq!(bank.get(0).unwrap().value(), "9");
        assert_eq!(bank.get(0).unwrap().grapheme_len(), 1);
    }

    #[test]
    fn commit_appends_on_touch_until_capacity() {
        let mut bank = CellBank::build(Environment::touch(), 3, None, None);
        for c in ['1', '2', '3', '4'] {
            bank.commit_char(0, c);
        }
        assert_eq!(bank.get(0).unwrap().value(), "123");
    }

    #[test]
    fn clear_all_empties_every_cell() {
        let mut bank = CellBank::build(Environment::desktop(), 4, None, Some("1234"));
        bank.clear_all();
        assert!(bank.cells().iter().all(Cell::is_empty));
        assert_eq!(bank.concat(), "");
    }

    #[test]
    fn disabled_flag_applies_to_all_cells() {
        let mut bank = CellBank::build(Environment::desktop(), 3, None, None);
        bank.set_all_disabled(true);
        assert!(bank.cells().iter().all(Cell::is_disabled));
        bank.set_all_disabled(false);
        assert!(!bank.cells().iter().any(Cell::is_disabled));
    }
}
