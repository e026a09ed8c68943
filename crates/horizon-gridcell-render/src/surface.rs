//! The painting surface abstraction.
//!
//! A [`Surface`] is whatever the host grid paints cells onto. Cells only ever
//! see this trait, so the same painting code drives a GPU backend, a software
//! rasterizer or the [`RecordingSurface`](crate::RecordingSurface) used in
//! tests.
//!
//! Brushes and clip regions are scarce per-paint resources. They are acquired
//! through [`ScopedBrush`] and [`ClipScope`], which release them when dropped,
//! including on early return and error paths.

use slotmap::new_key_type;

use crate::bitmap::Image;
use crate::types::{Color, Rect};

new_key_type! {
    /// Handle to a brush created by [`Surface::create_brush`].
    pub struct BrushId;
}

/// A target that grid cells paint onto.
pub trait Surface {
    /// The portion of the surface that is currently visible and writable.
    ///
    /// This is the viewport intersected with every active clip.
    fn visible_clip_bounds(&self) -> Rect;

    /// Push the current clip so a later [`restore_clip`](Self::restore_clip)
    /// returns to it.
    fn save_clip(&mut self);

    /// Narrow the current clip to its intersection with `rect`.
    fn set_clip(&mut self, rect: Rect);

    /// Pop the clip saved by the matching [`save_clip`](Self::save_clip).
    fn restore_clip(&mut self);

    /// Create a solid brush of the given color.
    fn create_brush(&mut self, color: Color) -> BrushId;

    /// Release a brush created by [`create_brush`](Self::create_brush).
    fn release_brush(&mut self, brush: BrushId);

    /// Fill a rectangle with a brush, honoring the current clip.
    fn fill_rect(&mut self, rect: Rect, brush: BrushId);

    /// Draw an image scaled into `dest`, honoring the current clip.
    fn draw_image(&mut self, image: &Image, dest: Rect);

    /// Draw a focus indicator whose contrast is derived from `base`.
    fn draw_focus_rect(&mut self, rect: Rect, base: Color);

    /// Draw the standard cell error glyph with a tooltip text.
    fn draw_error_icon(&mut self, rect: Rect, text: &str);
}

/// Saved clip regions for a surface.
///
/// The current clip always starts as the full viewport. Clips only ever
/// shrink: [`clip`](Self::clip) intersects with the existing region.
#[derive(Debug, Clone)]
pub struct ClipStack {
    stack: Vec<Rect>,
    current: Rect,
}

impl ClipStack {
    /// Create a stack whose initial clip is the whole viewport.
    pub fn new(viewport: Rect) -> Self {
        Self {
            stack: Vec::new(),
            current: viewport,
        }
    }

    /// The current clip region.
    #[inline]
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Save the current clip.
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the previously saved clip.
    ///
    /// Does nothing when there is no saved clip.
    pub fn restore(&mut self) {
        if let Some(rect) = self.stack.pop() {
            self.current = rect;
        }
    }

    /// Intersect the current clip with `rect`.
    ///
    /// A clip that no longer overlaps anything collapses to an empty
    /// rectangle at the requested origin.
    pub fn clip(&mut self, rect: Rect) {
        self.current = self
            .current
            .intersect(&rect)
            .unwrap_or(Rect::new(rect.left(), rect.top(), 0, 0));
    }

    /// Number of saved clips.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A brush that is released when the scope ends.
///
/// The scope owns the mutable borrow of the surface for its lifetime; draw
/// through [`surface`](Self::surface).
pub struct ScopedBrush<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    id: BrushId,
}

impl<'a, S: Surface + ?Sized> ScopedBrush<'a, S> {
    /// Create a brush on `surface`.
    pub fn acquire(surface: &'a mut S, color: Color) -> Self {
        let id = surface.create_brush(color);
        Self { surface, id }
    }

    /// The brush handle.
    #[inline]
    pub fn id(&self) -> BrushId {
        self.id
    }

    /// The surface this brush was created on.
    #[inline]
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ScopedBrush<'_, S> {
    fn drop(&mut self) {
        self.surface.release_brush(self.id);
    }
}

/// A clip region that is restored when the scope ends.
pub struct ClipScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ClipScope<'a, S> {
    /// Save the current clip of `surface` and narrow it to `rect`.
    pub fn new(surface: &'a mut S, rect: Rect) -> Self {
        surface.save_clip();
        surface.set_clip(rect);
        Self { surface }
    }

    /// The clipped surface.
    #[inline]
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ClipScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;

    #[test]
    fn test_clip_stack_intersects() {
        let mut stack = ClipStack::new(Rect::new(0, 0, 100, 100));
        stack.save();
        stack.clip(Rect::new(50, 50, 100, 100));
        assert_eq!(stack.current(), Rect::new(50, 50, 50, 50));
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert_eq!(stack.current(), Rect::new(0, 0, 100, 100));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_clip_stack_disjoint_is_empty() {
        let mut stack = ClipStack::new(Rect::new(0, 0, 10, 10));
        stack.clip(Rect::new(20, 20, 5, 5));
        assert!(stack.current().is_empty());
    }

    #[test]
    fn test_clip_stack_restore_without_save() {
        let mut stack = ClipStack::new(Rect::new(0, 0, 10, 10));
        stack.restore();
        assert_eq!(stack.current(), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_scoped_brush_released_on_drop() {
        let mut surface = RecordingSurface::new(Rect::new(0, 0, 50, 50));
        {
            let mut brush = ScopedBrush::acquire(&mut surface, Color::RED);
            let id = brush.id();
            brush.surface().fill_rect(Rect::new(0, 0, 10, 10), id);
            assert_eq!(brush.surface().live_brushes(), 1);
        }
        assert_eq!(surface.live_brushes(), 0);
    }

    #[test]
    fn test_clip_scope_restored_on_early_return() {
        fn paint(surface: &mut dyn Surface, bail: bool) -> Result<(), ()> {
            let mut clip = ClipScope::new(surface, Rect::new(5, 5, 10, 10));
            if bail {
                return Err(());
            }
            clip.surface()
                .draw_image(&Image::solid(1, 1, Color::BLUE), Rect::new(0, 0, 20, 20));
            Ok(())
        }

        let mut surface = RecordingSurface::new(Rect::new(0, 0, 50, 50));
        assert!(paint(&mut surface, true).is_err());
        assert_eq!(surface.clip_depth(), 0);
        assert_eq!(surface.visible_clip_bounds(), Rect::new(0, 0, 50, 50));

        assert!(paint(&mut surface, false).is_ok());
        assert_eq!(surface.clip_depth(), 0);
    }
}
