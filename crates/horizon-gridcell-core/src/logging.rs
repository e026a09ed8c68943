//! Logging facilities for Horizon Gridcell.
//!
//! Horizon Gridcell uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_gridcell=debug")
//!         .init();
//! }
//! ```
//!
//! Fallback image substitutions and edit-session transitions are reported at
//! `debug`; per-row and per-signal activity at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_gridcell_core::signal";
    /// Fallback image provider target.
    pub const FALLBACK: &str = "horizon_gridcell_render::fallback";
    /// Software surface target.
    pub const SURFACE: &str = "horizon_gridcell_render::surface";
    /// Cell painting target.
    pub const PAINT: &str = "horizon_gridcell::paint";
    /// Edit session and editing control target.
    pub const EDIT: &str = "horizon_gridcell::edit";
    /// Column configuration target.
    pub const COLUMN: &str = "horizon_gridcell::column";
}
