//! Basic geometry and color types for painting.
//!
//! Grid cells are laid out on whole device pixels, so every geometry type here
//! uses integer coordinates. Rectangles follow the usual half-open convention:
//! `right()` and `bottom()` are one past the last covered pixel.

/// A point in 2D pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A size in pixels (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero or negative area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }
}

/// Per-edge insets, used for padding and border widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0);

    /// Create from 4 values (top, right, bottom, left).
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create uniform insets.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal space (left + right).
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical space (top + bottom).
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// Check if every edge is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<[i32; 4]> for Edges {
    fn from([top, right, bottom, left]: [i32; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> i32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Check if `other` lies completely inside this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns `None` when the rectangles do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }

    /// Shrink the rectangle by per-edge insets.
    ///
    /// The result may have a non-positive size when the insets exceed the
    /// rectangle; callers check [`is_empty`](Self::is_empty).
    #[inline]
    pub fn deflate(&self, edges: Edges) -> Rect {
        Rect::new(
            self.origin.x + edges.left,
            self.origin.y + edges.top,
            self.size.width - edges.horizontal(),
            self.size.height - edges.vertical(),
        )
    }
}

/// An RGBA color with 8 bits per channel (non-premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color from a hex string (`#rgb`, `#rrggbb` or `#rrggbbaa`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::from_rgb8(digits.next()??, digits.next()??, digits.next()??))
            }
            6 => Some(Self::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Self::from_rgba8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors (`t` in 0.0-1.0).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Darken towards black by `amount` (0.0-1.0), keeping alpha.
    pub fn darker(self, amount: f32) -> Self {
        self.lerp(Self::BLACK.with_alpha(self.a), amount)
    }

    /// Lighten towards white by `amount` (0.0-1.0), keeping alpha.
    pub fn lighter(self, amount: f32) -> Self {
        self.lerp(Self::WHITE.with_alpha(self.a), amount)
    }

    /// Check if the color is fully transparent.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Convert to an `image` crate pixel.
    #[inline]
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb8(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
    pub const GRAY: Self = Self::from_rgb8(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::from_rgb8(211, 211, 211);
    pub const DARK_GRAY: Self = Self::from_rgb8(64, 64, 64);
    /// Default window background.
    pub const WINDOW: Self = Self::WHITE;
    /// Default window text.
    pub const WINDOW_TEXT: Self = Self::BLACK;
    /// Default selection highlight.
    pub const HIGHLIGHT: Self = Self::from_rgb8(51, 153, 255);
    /// Default text on a selection highlight.
    pub const HIGHLIGHT_TEXT: Self = Self::WHITE;
    /// Default grid line color.
    pub const GRID_LINE: Self = Self::from_rgb8(160, 160, 160);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
        assert!(!rect.is_empty());
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0, 0, 100, 100);
        assert!(rect.contains(Point::new(50, 50)));
        assert!(rect.contains(Point::new(0, 0)));
        assert!(!rect.contains(Point::new(100, 100)));
        assert!(rect.contains_rect(&Rect::new(10, 10, 90, 90)));
        assert!(!rect.contains_rect(&Rect::new(10, 10, 91, 90)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));

        let c = Rect::new(200, 200, 10, 10);
        assert!(a.intersect(&c).is_none());

        // Touching edges do not overlap.
        let d = Rect::new(100, 0, 10, 10);
        assert!(a.intersect(&d).is_none());
    }

    #[test]
    fn test_rect_deflate() {
        let rect = Rect::new(0, 0, 40, 20);
        let inner = rect.deflate(Edges::new(1, 2, 3, 4));
        assert_eq!(inner, Rect::new(4, 1, 34, 16));

        let collapsed = rect.deflate(Edges::uniform(15));
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_edges_totals() {
        let edges = Edges::from([1, 2, 3, 4]);
        assert_eq!(edges.horizontal(), 6);
        assert_eq!(edges.vertical(), 4);
        assert!(Edges::ZERO.is_zero());
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(
            Color::from_hex("#0000ff80"),
            Some(Color::from_rgba8(0, 0, 255, 128))
        );
        assert_eq!(Color::from_hex("#ggg"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        // Multi-byte characters with a matching byte length.
        assert_eq!(Color::from_hex("aééb"), None);
        assert_eq!(Color::from_hex("#ffééff"), None);
    }

    #[test]
    fn test_color_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::from_rgb8(128, 128, 128));
        assert_eq!(Color::WHITE.darker(1.0), Color::BLACK);
        assert_eq!(Color::BLACK.lighter(1.0), Color::WHITE);
    }
}
