//! A software surface that records draw calls.
//!
//! [`RecordingSurface`] performs no rasterization. It keeps the clip state and
//! brush table a real backend would keep, and appends one [`DrawCommand`] per
//! call so the painted output of a cell can be inspected.

use horizon_gridcell_core::logging::targets;
use slotmap::SlotMap;

use crate::bitmap::{Image, ImageId};
use crate::surface::{BrushId, ClipStack, Surface};
use crate::types::{Color, Rect};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle and the clip active when it was drawn.
    FillRect { rect: Rect, color: Color, clip: Rect },
    /// An image scaled into `dest`, clipped to `clip`.
    DrawImage { image: ImageId, dest: Rect, clip: Rect },
    /// A focus indicator.
    FocusRect { rect: Rect, base: Color },
    /// An error glyph with its tooltip.
    ErrorIcon { rect: Rect, text: String },
}

/// A [`Surface`] that records every draw call instead of rasterizing.
#[derive(Debug)]
pub struct RecordingSurface {
    clips: ClipStack,
    brushes: SlotMap<BrushId, Color>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a surface covering `viewport`.
    pub fn new(viewport: Rect) -> Self {
        Self {
            clips: ClipStack::new(viewport),
            brushes: SlotMap::with_key(),
            commands: Vec::new(),
        }
    }

    /// All draw calls in the order they were made.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded draw calls, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of brushes created and not yet released.
    pub fn live_brushes(&self) -> usize {
        self.brushes.len()
    }

    /// Number of saved clips not yet restored.
    pub fn clip_depth(&self) -> usize {
        self.clips.depth()
    }

    /// Recorded image draws as `(image, dest, clip)` tuples.
    pub fn image_draws(&self) -> impl Iterator<Item = (ImageId, Rect, Rect)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::DrawImage { image, dest, clip } => Some((*image, *dest, *clip)),
            _ => None,
        })
    }

    /// Recorded fills as `(rect, color)` tuples.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn visible_clip_bounds(&self) -> Rect {
        self.clips.current()
    }

    fn save_clip(&mut self) {
        self.clips.save();
    }

    fn set_clip(&mut self, rect: Rect) {
        self.clips.clip(rect);
    }

    fn restore_clip(&mut self) {
        self.clips.restore();
    }

    fn create_brush(&mut self, color: Color) -> BrushId {
        self.brushes.insert(color)
    }

    fn release_brush(&mut self, brush: BrushId) {
        if self.brushes.remove(brush).is_none() {
            tracing::warn!(target: targets::SURFACE, ?brush, "released unknown brush");
        }
    }

    fn fill_rect(&mut self, rect: Rect, brush: BrushId) {
        let Some(&color) = self.brushes.get(brush) else {
            tracing::warn!(target: targets::SURFACE, ?brush, "fill with unknown brush ignored");
            return;
        };
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            clip: self.clips.current(),
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.id(),
            dest,
            clip: self.clips.current(),
        });
    }

    fn draw_focus_rect(&mut self, rect: Rect, base: Color) {
        self.commands.push(DrawCommand::FocusRect { rect, base });
    }

    fn draw_error_icon(&mut self, rect: Rect, text: &str) {
        self.commands.push(DrawCommand::ErrorIcon {
            rect,
            text: text.to_string(),
        });
    }
}
