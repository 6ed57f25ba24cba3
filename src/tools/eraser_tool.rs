use egui::{Pos2, Rect, pos2, vec2};

use super::{LiveMark, Tool, ToolResponse, ToolSettings};

/// Clears square regions of the surface while dragging.
///
/// Erasing is raster-only: it never produces a command, so it cannot be
/// undone and is lost on the next full redraw.
#[derive(Debug, Clone, Default)]
pub struct EraserTool {
    erasing: bool,
}

impl EraserTool {
    pub fn new() -> Self {
        Self { erasing: false }
    }

    /// The region cleared for a pointer at `pos`.
    pub fn erase_region(pos: Pos2, settings: &ToolSettings) -> Rect {
        Rect::from_min_size(
            pos2(pos.x - settings.eraser_offset, pos.y - settings.eraser_offset),
            vec2(settings.eraser_size, settings.eraser_size),
        )
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn is_drawing(&self) -> bool {
        self.erasing
    }

    fn on_pointer_down(&mut self, _pos: Pos2, _settings: &ToolSettings) -> ToolResponse {
        // Pressing only arms the eraser; the first move clears.
        self.erasing = true;
        ToolResponse::none()
    }

    fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse {
        if !self.erasing {
            return ToolResponse::none();
        }
        ToolResponse::mark(LiveMark::Erase(Self::erase_region(pos, settings)))
    }

    fn on_pointer_up(&mut self, _settings: &ToolSettings) -> ToolResponse {
        self.erasing = false;
        ToolResponse::none()
    }

    fn cancel(&mut self) -> bool {
        std::mem::take(&mut self.erasing)
    }
}
