//! Border and alignment value types.

use horizon_gridcell_render::{Color, Edges};

/// The style of one cell border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border.
    None,
    /// A single solid line.
    #[default]
    Single,
    /// A sunken single line.
    Inset,
    /// A sunken double line.
    InsetDouble,
    /// A raised single line.
    Outset,
    /// A raised double line.
    OutsetDouble,
    /// A raised line drawn only on part of the edge (row headers).
    OutsetPartial,
}

impl BorderStyle {
    /// Width of this edge in pixels.
    pub fn width(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Single | Self::Inset | Self::Outset | Self::OutsetPartial => 1,
            Self::InsetDouble | Self::OutsetDouble => 2,
        }
    }

    /// The color to draw this edge with.
    ///
    /// `leading` is true for the top and left edges. Sunken styles darken the
    /// leading edges and lighten the trailing ones; raised styles do the
    /// opposite.
    pub fn shade(self, base: Color, leading: bool) -> Color {
        match (self, leading) {
            (Self::Inset | Self::InsetDouble, true) | (Self::Outset | Self::OutsetDouble, false) => {
                base.darker(0.4)
            }
            (Self::Inset | Self::InsetDouble, false) | (Self::Outset | Self::OutsetDouble, true) => {
                base.lighter(0.6)
            }
            _ => base,
        }
    }
}

/// Border styles for the four edges of a cell, as decided by the host grid
/// for one paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedBorderStyle {
    pub top: BorderStyle,
    pub right: BorderStyle,
    pub bottom: BorderStyle,
    pub left: BorderStyle,
    /// Base color of the grid lines.
    pub color: Color,
}

impl Default for AdvancedBorderStyle {
    fn default() -> Self {
        Self::uniform(BorderStyle::Single)
    }
}

impl AdvancedBorderStyle {
    /// Use the same style on every edge.
    pub fn uniform(style: BorderStyle) -> Self {
        Self {
            top: style,
            right: style,
            bottom: style,
            left: style,
            color: Color::GRID_LINE,
        }
    }

    /// No border on any edge.
    pub fn none() -> Self {
        Self::uniform(BorderStyle::None)
    }

    /// Set the grid line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Pixel widths of all four edges.
    pub fn border_widths(&self) -> Edges {
        Edges::new(
            self.top.width(),
            self.right.width(),
            self.bottom.width(),
            self.left.width(),
        )
    }
}

/// Where content sits inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    /// Not specified; the grid's inherited alignment applies.
    #[default]
    NotSet,
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    /// Parse from a configuration string such as `"middle-center"`.
    pub fn from_css(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "not-set" | "notset" => Some(Self::NotSet),
            "top-left" => Some(Self::TopLeft),
            "top-center" => Some(Self::TopCenter),
            "top-right" => Some(Self::TopRight),
            "middle-left" => Some(Self::MiddleLeft),
            "middle-center" | "center" => Some(Self::MiddleCenter),
            "middle-right" => Some(Self::MiddleRight),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-center" => Some(Self::BottomCenter),
            "bottom-right" => Some(Self::BottomRight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_widths() {
        let border = AdvancedBorderStyle {
            top: BorderStyle::None,
            right: BorderStyle::Single,
            bottom: BorderStyle::InsetDouble,
            left: BorderStyle::Outset,
            color: Color::BLACK,
        };
        assert_eq!(border.border_widths(), Edges::new(0, 1, 2, 1));
        assert_eq!(AdvancedBorderStyle::none().border_widths(), Edges::ZERO);
    }

    #[test]
    fn test_border_shade() {
        let base = Color::GRAY;
        assert_eq!(BorderStyle::Single.shade(base, true), base);
        assert_eq!(BorderStyle::Inset.shade(base, true), base.darker(0.4));
        assert_eq!(BorderStyle::Inset.shade(base, false), base.lighter(0.6));
        assert_eq!(BorderStyle::Outset.shade(base, true), base.lighter(0.6));
    }

    #[test]
    fn test_alignment_from_css() {
        assert_eq!(
            ContentAlignment::from_css("middle_center"),
            Some(ContentAlignment::MiddleCenter)
        );
        assert_eq!(
            ContentAlignment::from_css("Bottom Right"),
            Some(ContentAlignment::BottomRight)
        );
        assert_eq!(ContentAlignment::from_css("diagonal"), None);
    }
}
