//! The per-cell style.

use horizon_gridcell_render::{Color, Edges, Image};

use crate::types::ContentAlignment;

/// Visual properties a grid hands to a cell when painting or editing it.
///
/// The host grid resolves inheritance (grid default, column default, row,
/// cell) before handing a style over, so every field here is concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    /// Background color.
    pub back_color: Color,
    /// Foreground (text and glyph) color.
    pub fore_color: Color,
    /// Background color when the cell is selected.
    pub selection_back_color: Color,
    /// Foreground color when the cell is selected.
    pub selection_fore_color: Color,
    /// Space between the cell border and its content.
    pub padding: Edges,
    /// Content alignment.
    pub alignment: ContentAlignment,
    /// What to show for a cell whose value is unset.
    pub null_value: Option<Image>,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            back_color: Color::WINDOW,
            fore_color: Color::WINDOW_TEXT,
            selection_back_color: Color::HIGHLIGHT,
            selection_fore_color: Color::HIGHLIGHT_TEXT,
            padding: Edges::ZERO,
            alignment: ContentAlignment::NotSet,
            null_value: None,
        }
    }
}

impl CellStyle {
    /// Create a style with the system default colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    /// Set the foreground color.
    pub fn with_fore_color(mut self, color: Color) -> Self {
        self.fore_color = color;
        self
    }

    /// Set the selection colors.
    pub fn with_selection_colors(mut self, back: Color, fore: Color) -> Self {
        self.selection_back_color = back;
        self.selection_fore_color = fore;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the content alignment.
    pub fn with_alignment(mut self, alignment: ContentAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the image shown for unset values.
    pub fn with_null_value(mut self, image: Image) -> Self {
        self.null_value = Some(image);
        self
    }

    /// Background color for the given selection state.
    pub fn effective_back_color(&self, selected: bool) -> Color {
        if selected {
            self.selection_back_color
        } else {
            self.back_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let style = CellStyle::new();
        assert_eq!(style.back_color, Color::WINDOW);
        assert_eq!(style.selection_back_color, Color::HIGHLIGHT);
        assert!(style.null_value.is_none());
        assert!(style.padding.is_zero());
    }

    #[test]
    fn test_builders() {
        let img = Image::solid(2, 2, Color::RED);
        let style = CellStyle::new()
            .with_back_color(Color::LIGHT_GRAY)
            .with_selection_colors(Color::BLUE, Color::WHITE)
            .with_null_value(img.clone());

        assert_eq!(style.effective_back_color(false), Color::LIGHT_GRAY);
        assert_eq!(style.effective_back_color(true), Color::BLUE);
        assert_eq!(style.null_value, Some(img));
    }
}
