//! Core systems for Horizon Gridcell.
//!
//! This crate provides the small set of foundational pieces shared by the
//! gridcell crates:
//!
//! - **Signal/Slot System**: Type-safe notification from editing controls
//!   to any interested observer
//! - **Logging**: `tracing` target names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_gridcell_core::Signal;
//!
//! // Create a signal that notifies when a selection changes
//! let selection_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = selection_changed.connect(|row| {
//!     println!("Row {} selected", row);
//! });
//!
//! // Emit the signal
//! selection_changed.emit(3);
//!
//! // Disconnect when done
//! selection_changed.disconnect(conn_id);
//! ```

pub mod logging;
mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};

// Signals are shared between the grid host and its editing controls.
static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
