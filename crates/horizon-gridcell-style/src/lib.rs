//! Cell styling for Horizon Gridcell.
//!
//! This crate describes how a grid cell should look, independent of how it is
//! painted:
//!
//! - [`CellStyle`]: colors, padding, alignment and the null-value image
//! - [`AdvancedBorderStyle`]: per-edge border styles and their pixel widths
//! - [`CellStyleConfig`]: a serde-deserializable form of [`CellStyle`] for
//!   configuration files
//!
//! # Example
//!
//! ```
//! use horizon_gridcell_style::prelude::*;
//! use horizon_gridcell_render::{Color, Edges};
//!
//! let style = CellStyle::new()
//!     .with_back_color(Color::WHITE)
//!     .with_padding(Edges::uniform(2))
//!     .with_alignment(ContentAlignment::MiddleCenter);
//!
//! let border = AdvancedBorderStyle::uniform(BorderStyle::Single);
//! assert_eq!(border.border_widths(), Edges::uniform(1));
//! assert_eq!(style.padding.horizontal(), 4);
//! ```

mod cell_style;
mod config;
mod error;
pub mod types;

pub use cell_style::CellStyle;
pub use config::CellStyleConfig;
pub use error::{Error, Result};
pub use types::{AdvancedBorderStyle, BorderStyle, ContentAlignment};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cell_style::CellStyle;
    pub use crate::config::CellStyleConfig;
    pub use crate::types::{AdvancedBorderStyle, BorderStyle, ContentAlignment};
}
