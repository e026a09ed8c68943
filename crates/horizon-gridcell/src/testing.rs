//! Test doubles shared by the unit tests of this crate.

use parking_lot::Mutex;

use crate::host::{CellAddress, GridHost};

/// A call the editor or renderer made on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostEvent {
    Dirty(bool),
    EndEdit,
}

/// A [`GridHost`] with fixed state that records every callback.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub current: Option<CellAddress>,
    pub focused: bool,
    pub show_errors: bool,
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_on(column: usize, row: usize) -> Self {
        Self {
            current: Some(CellAddress::new(column, row)),
            focused: true,
            ..Self::default()
        }
    }

    pub fn showing_errors() -> Self {
        Self {
            show_errors: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }
}

impl GridHost for RecordingHost {
    fn current_cell_address(&self) -> Option<CellAddress> {
        self.current
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn show_cell_errors(&self) -> bool {
        self.show_errors
    }

    fn end_edit(&self) -> bool {
        self.events.lock().push(HostEvent::EndEdit);
        true
    }

    fn notify_current_cell_dirty(&self, dirty: bool) {
        self.events.lock().push(HostEvent::Dirty(dirty));
    }
}
