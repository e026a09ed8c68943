//! Image placement inside a cell.
//!
//! [`fit`] computes where an image of a given natural size is drawn inside a
//! container rectangle. It is pure integer arithmetic so the same inputs give
//! the same pixels on every platform:
//!
//! - aspect ratios are compared by cross-multiplying in `i64`
//! - the scaled dimension is rounded half away from zero
//! - centering offsets use truncating integer halving of the slack
//!
//! Placements may extend past the container ([`ImageLayout::Normal`] with a
//! large image); the caller clips.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use horizon_gridcell_render::{Rect, Size};
use parking_lot::RwLock;

use crate::error::{GridCellError, GridCellResult};

/// How an image is laid out inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ImageLayout {
    /// Inherit the owning column's layout.
    #[default]
    NotSet = 0,
    /// Natural size, centered.
    Normal = 1,
    /// Stretched to fill the cell, ignoring aspect ratio.
    Stretch = 2,
    /// Largest aspect-preserving size that fits, centered.
    Zoom = 3,
}

impl ImageLayout {
    /// The configuration name of this layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "not-set",
            Self::Normal => "normal",
            Self::Stretch => "stretch",
            Self::Zoom => "zoom",
        }
    }

    /// Whether [`fit`] can place an image with this layout.
    pub fn is_placeable(self) -> bool {
        matches!(self, Self::Normal | Self::Zoom)
    }
}

impl fmt::Display for ImageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for ImageLayout {
    type Error = GridCellError;

    fn try_from(value: u8) -> GridCellResult<Self> {
        match value {
            0 => Ok(Self::NotSet),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Stretch),
            3 => Ok(Self::Zoom),
            other => Err(GridCellError::InvalidLayoutMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl FromStr for ImageLayout {
    type Err = GridCellError;

    fn from_str(s: &str) -> GridCellResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "not-set" | "notset" | "not_set" => Ok(Self::NotSet),
            "normal" => Ok(Self::Normal),
            "stretch" => Ok(Self::Stretch),
            "zoom" => Ok(Self::Zoom),
            _ => Err(GridCellError::InvalidLayoutMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Compute the placement of an image of size `natural` inside `container`.
///
/// # Errors
///
/// Returns [`GridCellError::InvalidLayoutMode`] for any mode other than
/// [`ImageLayout::Normal`] and [`ImageLayout::Zoom`].
///
/// # Example
///
/// ```
/// use horizon_gridcell::layout::{ImageLayout, fit};
/// use horizon_gridcell_render::{Rect, Size};
///
/// let placed = fit(Rect::new(0, 0, 40, 40), Size::new(30, 10), ImageLayout::Zoom).unwrap();
/// assert_eq!(placed, Rect::new(0, 13, 40, 13));
/// ```
pub fn fit(container: Rect, natural: Size, mode: ImageLayout) -> GridCellResult<Rect> {
    let size = match mode {
        ImageLayout::Normal => natural,
        ImageLayout::Zoom => zoom_size(container.size, natural),
        ImageLayout::NotSet | ImageLayout::Stretch => {
            return Err(GridCellError::InvalidLayoutMode {
                mode: mode.to_string(),
            });
        }
    };
    Ok(center(container, size))
}

/// Place an image at its natural size, centered horizontally and anchored to
/// the top of `container`.
pub fn place_top_centered(container: Rect, natural: Size) -> Rect {
    Rect::new(
        container.left() + (container.width() - natural.width) / 2,
        container.top(),
        natural.width,
        natural.height,
    )
}

fn center(container: Rect, size: Size) -> Rect {
    Rect::new(
        container.left() + (container.width() - size.width) / 2,
        container.top() + (container.height() - size.height) / 2,
        size.width,
        size.height,
    )
}

fn zoom_size(bounds: Size, natural: Size) -> Size {
    if natural.is_empty() {
        return Size::ZERO;
    }

    let (nw, nh) = (i64::from(natural.width), i64::from(natural.height));
    let (bw, bh) = (i64::from(bounds.width), i64::from(bounds.height));

    if nw * bh < nh * bw {
        // Relatively taller than the container: height bound.
        Size::new(div_round(nw * bh, nh), bounds.height)
    } else {
        Size::new(bounds.width, div_round(nh * bw, nw))
    }
}

/// `numerator / denominator` rounded half away from zero. `denominator > 0`.
fn div_round(numerator: i64, denominator: i64) -> i32 {
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    let rounded = if numerator < 0 { -magnitude } else { magnitude };
    i32::try_from(rounded).unwrap_or(if rounded < 0 { i32::MIN } else { i32::MAX })
}

/// A column's image layout, shared with every cell of the column.
///
/// Cells keep a handle to their owning column's layout so that a cell whose
/// own layout is [`ImageLayout::NotSet`] follows later changes to the column.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout(Arc<RwLock<ImageLayout>>);

impl ColumnLayout {
    /// Create a shared layout.
    pub fn new(layout: ImageLayout) -> Self {
        Self(Arc::new(RwLock::new(layout)))
    }

    /// The current layout.
    pub fn get(&self) -> ImageLayout {
        *self.0.read()
    }

    /// Replace the layout for every handle.
    pub fn set(&self, layout: ImageLayout) {
        *self.0.write() = layout;
    }
}
