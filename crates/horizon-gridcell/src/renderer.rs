//! Static painting of image option cells.
//!
//! [`OptionCellRenderer`] paints a cell that is not being edited: border,
//! background (selection aware), the laid-out image, the focus indicator and
//! the host's error icon. Everything is confined to the request's clip
//! bounds, and every brush and clip it acquires is scoped so it is released
//! on every exit path, including errors.

use std::ops::{BitOr, BitOrAssign};

use horizon_gridcell_core::logging::targets;
use horizon_gridcell_render::{ClipScope, Color, Image, Rect, ScopedBrush, Size, Surface};
use horizon_gridcell_style::{AdvancedBorderStyle, CellStyle};

use crate::error::{GridCellError, GridCellResult};
use crate::host::{CellAddress, GridHost};
use crate::layout::{ImageLayout, fit};
use crate::option_set::CellValue;

/// Which parts of a cell the host wants painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintParts(u8);

impl PaintParts {
    pub const NONE: Self = Self(0);
    pub const BACKGROUND: Self = Self(1 << 0);
    pub const BORDER: Self = Self(1 << 1);
    pub const CONTENT_BACKGROUND: Self = Self(1 << 2);
    pub const CONTENT_FOREGROUND: Self = Self(1 << 3);
    pub const ERROR_ICON: Self = Self(1 << 4);
    pub const FOCUS: Self = Self(1 << 5);
    pub const SELECTION_BACKGROUND: Self = Self(1 << 6);
    pub const ALL: Self = Self(0x7f);

    /// Check if every part in `other` is requested.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// These parts without the parts in `other`.
    #[inline]
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// The raw bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl Default for PaintParts {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for PaintParts {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PaintParts {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Element state flags for the cell being painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementState {
    /// The cell is selected.
    pub selected: bool,
    /// The cell cannot be edited.
    pub read_only: bool,
}

impl ElementState {
    /// Sets the selected state.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the read-only state.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Everything the host supplies for one cell paint call.
#[derive(Debug, Clone)]
pub struct CellPaintRequest<'a> {
    /// Region of the surface that needs repainting.
    pub clip_bounds: Rect,
    /// Full bounds of the cell, border included.
    pub cell_bounds: Rect,
    pub row_index: usize,
    pub column_index: usize,
    pub state: ElementState,
    /// The raw cell value.
    pub value: CellValue,
    /// The image derived from the value, if any.
    pub formatted_value: Option<&'a Image>,
    /// Host-supplied error text; empty when the cell has no error.
    pub error_text: &'a str,
    /// The resolved cell style. Painting fails without one.
    pub style: Option<&'a CellStyle>,
    pub border_style: AdvancedBorderStyle,
    pub parts: PaintParts,
}

impl<'a> CellPaintRequest<'a> {
    /// Create a request that paints every part of the cell at `address`.
    pub fn new(cell_bounds: Rect, address: CellAddress, style: &'a CellStyle) -> Self {
        Self {
            clip_bounds: cell_bounds,
            cell_bounds,
            row_index: address.row,
            column_index: address.column,
            state: ElementState::default(),
            value: CellValue::Unset,
            formatted_value: None,
            error_text: "",
            style: Some(style),
            border_style: AdvancedBorderStyle::default(),
            parts: PaintParts::ALL,
        }
    }

    /// Sets the clip bounds.
    pub fn with_clip_bounds(mut self, clip_bounds: Rect) -> Self {
        self.clip_bounds = clip_bounds;
        self
    }

    /// Sets the element state.
    pub fn with_state(mut self, state: ElementState) -> Self {
        self.state = state;
        self
    }

    /// Sets the raw value and its formatted image.
    pub fn with_value(mut self, value: CellValue, formatted_value: Option<&'a Image>) -> Self {
        self.value = value;
        self.formatted_value = formatted_value;
        self
    }

    /// Sets the error text.
    pub fn with_error_text(mut self, error_text: &'a str) -> Self {
        self.error_text = error_text;
        self
    }

    /// Sets the border style.
    pub fn with_border_style(mut self, border_style: AdvancedBorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    /// Sets the requested parts.
    pub fn with_parts(mut self, parts: PaintParts) -> Self {
        self.parts = parts;
        self
    }

    /// The address of the cell being painted.
    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.column_index, self.row_index)
    }
}

/// Size of the error glyph.
const ERROR_ICON_SIZE: Size = Size::new(12, 11);
/// Space kept between the error glyph and the cell edges.
const ERROR_ICON_MARGIN: i32 = 4;

/// Paints the non-editing appearance of an image cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionCellRenderer {
    layout: ImageLayout,
}

impl OptionCellRenderer {
    /// Create a renderer that places images with `layout`.
    ///
    /// `layout` is the cell's resolved layout; [`ImageLayout::NotSet`] and
    /// [`ImageLayout::Stretch`] make painting an image fail.
    pub fn new(layout: ImageLayout) -> Self {
        Self { layout }
    }

    /// The layout used to place images.
    pub fn layout(&self) -> ImageLayout {
        self.layout
    }

    /// Paint one cell.
    ///
    /// # Errors
    ///
    /// - [`GridCellError::InvalidArgument`] if the request has no style
    /// - [`GridCellError::InvalidLayoutMode`] if the layout cannot place images
    pub fn paint(
        &self,
        surface: &mut dyn Surface,
        host: &dyn GridHost,
        request: &CellPaintRequest<'_>,
    ) -> GridCellResult<()> {
        let style = request
            .style
            .ok_or_else(|| GridCellError::invalid_argument("style", "a cell style is required"))?;

        tracing::trace!(
            target: targets::PAINT,
            row = request.row_index,
            column = request.column_index,
            value = ?request.value,
            parts = request.parts.bits(),
            "painting image cell"
        );

        let mut cell_clip = ClipScope::new(surface, request.clip_bounds);
        let surface = cell_clip.surface();
        let parts = request.parts;

        if parts.contains(PaintParts::BORDER) {
            paint_border(surface, request.cell_bounds, &request.border_style);
        }

        let interior = request
            .cell_bounds
            .deflate(request.border_style.border_widths());
        if interior.is_empty() {
            return Ok(());
        }
        let content = interior.deflate(style.padding);

        let selected = request.state.selected && parts.contains(PaintParts::SELECTION_BACKGROUND);
        let back_color = style.effective_back_color(selected);

        {
            let mut brush = ScopedBrush::acquire(&mut *surface, back_color);
            let brush_id = brush.id();
            let image = request.formatted_value.filter(|image| !image.is_empty());

            if parts.contains(PaintParts::BACKGROUND) {
                brush.surface().fill_rect(interior, brush_id);
            }
            if let Some(image) = image
                && !content.is_empty()
                && parts.contains(PaintParts::CONTENT_FOREGROUND)
            {
                let placement = fit(content, image.size(), self.layout)?;
                paint_image(brush.surface(), image, placement, content);
            }

            if parts.contains(PaintParts::FOCUS)
                && !content.is_empty()
                && host.is_focused()
                && host.is_current_cell(request.address())
            {
                brush.surface().draw_focus_rect(content, back_color);
            }
        }

        if parts.contains(PaintParts::ERROR_ICON)
            && host.show_cell_errors()
            && !request.error_text.is_empty()
        {
            paint_error_icon(surface, interior, request.error_text);
        }

        Ok(())
    }
}

/// Draw `image` at `placement`, clipped to the content and visible region.
fn paint_image(surface: &mut dyn Surface, image: &Image, placement: Rect, content: Rect) {
    let visible = surface.visible_clip_bounds();
    let Some(clip) = placement
        .intersect(&content)
        .and_then(|rect| rect.intersect(&visible))
    else {
        return;
    };

    let mut scope = ClipScope::new(surface, clip);
    scope.surface().draw_image(image, placement);
}

fn paint_border(surface: &mut dyn Surface, bounds: Rect, border: &AdvancedBorderStyle) {
    let widths = border.border_widths();
    let middle_height = bounds.height() - widths.vertical();

    let edges = [
        (
            Rect::new(bounds.left(), bounds.top(), bounds.width(), widths.top),
            border.top.shade(border.color, true),
        ),
        (
            Rect::new(
                bounds.left(),
                bounds.bottom() - widths.bottom,
                bounds.width(),
                widths.bottom,
            ),
            border.bottom.shade(border.color, false),
        ),
        (
            Rect::new(
                bounds.left(),
                bounds.top() + widths.top,
                widths.left,
                middle_height,
            ),
            border.left.shade(border.color, true),
        ),
        (
            Rect::new(
                bounds.right() - widths.right,
                bounds.top() + widths.top,
                widths.right,
                middle_height,
            ),
            border.right.shade(border.color, false),
        ),
    ];

    for (rect, color) in edges {
        if !rect.is_empty() {
            fill(surface, rect, color);
        }
    }
}

fn fill(surface: &mut dyn Surface, rect: Rect, color: Color) {
    let mut brush = ScopedBrush::acquire(surface, color);
    let id = brush.id();
    brush.surface().fill_rect(rect, id);
}

fn paint_error_icon(surface: &mut dyn Surface, interior: Rect, text: &str) {
    let fits = interior.width() >= ERROR_ICON_SIZE.width + 2 * ERROR_ICON_MARGIN
        && interior.height() >= ERROR_ICON_SIZE.height + 2 * ERROR_ICON_MARGIN;
    if !fits {
        tracing::trace!(target: targets::PAINT, "cell too small for error icon");
        return;
    }

    let icon = Rect::new(
        interior.right() - ERROR_ICON_MARGIN - ERROR_ICON_SIZE.width,
        interior.top() + (interior.height() - ERROR_ICON_SIZE.height) / 2,
        ERROR_ICON_SIZE.width,
        ERROR_ICON_SIZE.height,
    );
    surface.draw_error_icon(icon, text);
}
