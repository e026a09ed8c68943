//! The host grid as seen from cells and editing controls.

/// Address of a cell in the host grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub column: usize,
    pub row: usize,
}

impl CellAddress {
    /// Create a cell address.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// The services a host grid provides to its cells and editing controls.
///
/// All calls happen on the grid's UI thread. The host is shared with the
/// editing control for the length of an edit session, so methods take
/// `&self`; implementations keep their mutable state behind a lock.
pub trait GridHost: Send + Sync {
    /// The cell that currently has the grid's cursor, if any.
    fn current_cell_address(&self) -> Option<CellAddress>;

    /// Whether the grid has keyboard focus.
    fn is_focused(&self) -> bool;

    /// Whether the grid paints error icons for cells with error text.
    fn show_cell_errors(&self) -> bool;

    /// Commit the current edit and leave edit mode.
    ///
    /// Returns `false` if the grid refused to end the edit (for example
    /// because validation failed).
    fn end_edit(&self) -> bool;

    /// Mark the current cell as changed (or unchanged) by the editor.
    fn notify_current_cell_dirty(&self, dirty: bool);

    /// Whether `address` is the current cell.
    fn is_current_cell(&self, address: CellAddress) -> bool {
        self.current_cell_address() == Some(address)
    }
}
