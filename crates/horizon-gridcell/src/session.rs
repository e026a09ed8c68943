//! The per-cell edit session.
//!
//! A cell is either displayed or edited:
//!
//! ```text
//! Display --begin--> Editing --commit/cancel--> Display
//! ```
//!
//! [`EditSession`] drives the host-owned editing control through that cycle
//! and rejects out-of-order calls. Only the committed value survives a
//! session; the editor is released at every exit.

use std::fmt;
use std::sync::Arc;

use horizon_gridcell_core::logging::targets;
use horizon_gridcell_style::CellStyle;

use crate::cell::EditableCell;
use crate::editor::{DataErrorContext, EditingControl};
use crate::error::{GridCellError, GridCellResult};
use crate::host::{CellAddress, GridHost};
use crate::option_set::CellValue;

/// Where a cell is in its display/edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// The cell is painted statically.
    #[default]
    Display,
    /// An editing control is showing the cell.
    Editing { address: CellAddress },
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("displaying"),
            Self::Editing { address } => {
                write!(f, "editing cell ({}, {})", address.column, address.row)
            }
        }
    }
}

/// The result of ending an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// The value to store in the cell.
    pub value: CellValue,
    /// Whether the user changed the value.
    pub dirty: bool,
}

/// Drives one cell's editing control through an edit.
#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
    original: CellValue,
}

impl EditSession {
    /// Create a session in the display state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Check if an edit is in progress.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Start editing the cell at `address`.
    ///
    /// The cell binds and opens `editor`. If that fails the editor is
    /// released and the session stays in the display state.
    pub fn begin(
        &mut self,
        cell: &dyn EditableCell,
        host: Arc<dyn GridHost>,
        editor: &mut dyn EditingControl,
        address: CellAddress,
        value: CellValue,
        style: &CellStyle,
    ) -> GridCellResult<()> {
        if self.is_editing() {
            return Err(GridCellError::invalid_transition(
                "begin edit",
                self.state.to_string(),
            ));
        }

        if let Err(err) = cell.initialize_editing_control(host, editor, address.row, &value, style)
        {
            editor.release();
            return Err(err);
        }

        self.state = EditState::Editing { address };
        self.original = value;
        tracing::debug!(
            target: targets::EDIT,
            column = address.column,
            row = address.row,
            ?value,
            "edit started"
        );
        Ok(())
    }

    /// Accept the editor's value and return to display.
    pub fn commit(&mut self, editor: &mut dyn EditingControl) -> GridCellResult<EditOutcome> {
        self.require_editing("commit")?;

        let outcome = EditOutcome {
            value: editor.get_formatted_value(DataErrorContext::Commit),
            dirty: editor.value_changed(),
        };
        self.finish(editor);
        tracing::debug!(
            target: targets::EDIT,
            value = ?outcome.value,
            dirty = outcome.dirty,
            "edit committed"
        );
        Ok(outcome)
    }

    /// Discard the editor's value and return to display.
    pub fn cancel(&mut self, editor: &mut dyn EditingControl) -> GridCellResult<EditOutcome> {
        self.require_editing("cancel")?;

        let outcome = EditOutcome {
            value: self.original,
            dirty: false,
        };
        self.finish(editor);
        tracing::debug!(target: targets::EDIT, "edit cancelled");
        Ok(outcome)
    }

    fn require_editing(&self, action: &'static str) -> GridCellResult<()> {
        if !self.is_editing() {
            return Err(GridCellError::invalid_transition(
                action,
                self.state.to_string(),
            ));
        }
        Ok(())
    }

    fn finish(&mut self, editor: &mut dyn EditingControl) {
        editor.release();
        self.state = EditState::Display;
        self.original = CellValue::Unset;
    }
}
