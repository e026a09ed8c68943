//! Painting layer for Horizon Gridcell.
//!
//! This crate provides the pieces a grid cell needs to draw itself without
//! knowing which backend the host grid renders with:
//!
//! - Integer pixel geometry ([`Rect`], [`Size`], [`Point`], [`Edges`]) and [`Color`]
//! - Immutable, cheaply clonable [`Image`]s backed by the `image` crate
//! - The [`Surface`] trait with a clip stack and RAII resource scopes
//!   ([`ScopedBrush`], [`ClipScope`])
//! - [`RecordingSurface`], a software surface that records every draw call
//! - The process-wide [`fallback_image`]
//!
//! # Painting With Scoped Resources
//!
//! ```
//! use horizon_gridcell_render::{ClipScope, Color, Rect, RecordingSurface, ScopedBrush, Surface};
//!
//! let mut surface = RecordingSurface::new(Rect::new(0, 0, 100, 100));
//! {
//!     let mut brush = ScopedBrush::acquire(&mut surface, Color::WHITE);
//!     let id = brush.id();
//!     brush.surface().fill_rect(Rect::new(0, 0, 40, 40), id);
//!
//!     let mut clip = ClipScope::new(brush.surface(), Rect::new(10, 10, 10, 10));
//!     clip.surface().draw_image(&horizon_gridcell_render::fallback_image(), Rect::new(0, 0, 40, 40));
//! }
//! assert_eq!(surface.live_brushes(), 0);
//! assert_eq!(surface.clip_depth(), 0);
//! ```

mod bitmap;
mod error;
pub mod fallback;
mod recording;
mod surface;
mod types;

pub use bitmap::{Image, ImageId};
pub use error::{RenderError, RenderResult};
pub use fallback::{fallback_image, install_fallback_image};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{BrushId, ClipScope, ClipStack, ScopedBrush, Surface};
pub use types::{Color, Edges, Point, Rect, Size};
