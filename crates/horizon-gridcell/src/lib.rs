//! Horizon Gridcell - image option cells for tabular grids.
//!
//! A cell of an image option column shows an image derived from its value
//! while it is displayed, and switches to an image picker, pre-populated
//! and already open, as soon as editing starts. The host grid is modelled by
//! the [`GridHost`] trait; painting goes through the backend-agnostic
//! [`Surface`](horizon_gridcell_render::Surface) trait.
//!
//! # Components
//!
//! - [`OptionSet`]: ordered key-to-image mapping shared by a column and its cells
//! - [`layout::fit`]: integer placement of an image in a cell
//! - [`OptionCellRenderer`]: static cell painting
//! - [`ImageOptionCell`] / [`ImageEnumCell`]: cells and the editor handoff
//! - [`ImagePickerEditingControl`]: the drop-down picker
//! - [`EditSession`]: the display/edit state machine
//! - [`ImageOptionColumn`] / [`ImageEnumColumn`]: columns with template checks
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_gridcell::prelude::*;
//! use horizon_gridcell_render::{Color, Image};
//!
//! struct Grid;
//!
//! impl GridHost for Grid {
//!     fn current_cell_address(&self) -> Option<CellAddress> { None }
//!     fn is_focused(&self) -> bool { false }
//!     fn show_cell_errors(&self) -> bool { false }
//!     fn end_edit(&self) -> bool { true }
//!     fn notify_current_cell_dirty(&self, _dirty: bool) {}
//! }
//!
//! let options = OptionSet::new([
//!     (OptionKey(0), Image::solid(16, 16, Color::GREEN)),
//!     (OptionKey(1), Image::solid(16, 16, Color::RED)),
//! ])?;
//! let column = ImageOptionColumn::new(Arc::new(options));
//! let cell = column.create_cell();
//!
//! let mut picker = ImagePickerEditingControl::new();
//! let mut session = EditSession::new();
//! session.begin(
//!     &cell,
//!     Arc::new(Grid),
//!     &mut picker,
//!     CellAddress::new(0, 0),
//!     CellValue::Key(OptionKey(0)),
//!     column.default_cell_style(),
//! )?;
//! assert!(picker.is_dropped_down());
//!
//! picker.select_index(1);
//! let outcome = session.commit(&mut picker)?;
//! assert_eq!(outcome.value, CellValue::Key(OptionKey(1)));
//! assert!(outcome.dirty);
//! # Ok::<(), horizon_gridcell::GridCellError>(())
//! ```

pub mod cell;
pub mod column;
pub mod config;
pub mod editor;
mod error;
mod host;
pub mod keys;
pub mod layout;
mod option_set;
pub mod renderer;
pub mod session;

#[cfg(test)]
mod testing;

pub use horizon_gridcell_core::{ConnectionGuard, ConnectionId, Signal, logging};

pub use cell::{
    CellKind, EditableCell, EditorType, FormattedValueType, GridCell, ImageEnumCell,
    ImageOptionCell, PaintableCell, TextCell,
};
pub use column::{ColumnTemplate, ImageEnumColumn, ImageOptionColumn};
pub use config::ColumnConfig;
pub use editor::{DataErrorContext, EditingControl, ImagePickerEditingControl, RowDrawState};
pub use error::{GridCellError, GridCellResult};
pub use host::{CellAddress, GridHost};
pub use keys::{Key, KeyPress, KeyboardModifiers};
pub use layout::{ColumnLayout, ImageLayout};
pub use option_set::{CellValue, ImageEnum, LookupFailure, OptionKey, OptionSet, ValueDomain};
pub use renderer::{CellPaintRequest, ElementState, OptionCellRenderer, PaintParts};
pub use session::{EditOutcome, EditSession, EditState};

/// Painting primitives.
pub mod render {
    pub use horizon_gridcell_render::*;
}

/// Cell styles.
pub mod style {
    pub use horizon_gridcell_style::*;
}

/// Commonly used types.
pub mod prelude {
    pub use crate::cell::{
        EditableCell, GridCell, ImageEnumCell, ImageOptionCell, PaintableCell,
    };
    pub use crate::column::{ColumnTemplate, ImageEnumColumn, ImageOptionColumn};
    pub use crate::editor::{EditingControl, ImagePickerEditingControl};
    pub use crate::host::{CellAddress, GridHost};
    pub use crate::layout::ImageLayout;
    pub use crate::option_set::{CellValue, ImageEnum, OptionKey, OptionSet, ValueDomain};
    pub use crate::session::EditSession;
}
