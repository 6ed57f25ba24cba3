use egui::Pos2;

use super::{LiveMark, Tool, ToolResponse, ToolSettings};
use crate::command::Command;
use crate::stroke::StrokeBuilder;

/// Pencil: draws live segments while dragging and commits one freehand
/// shape on release.
#[derive(Debug, Clone, Default)]
pub struct FreehandTool {
    // Transient state: the stroke being drawn (if any)
    current_stroke: Option<StrokeBuilder>,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self { current_stroke: None }
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse {
        // A press without a release restarts from the new point.
        self.current_stroke = Some(StrokeBuilder::begin(
            pos,
            settings.color,
            settings.stroke_width,
            settings.capture,
        ));
        ToolResponse::none()
    }

    fn on_pointer_move(&mut self, pos: Pos2, _settings: &ToolSettings) -> ToolResponse {
        match &mut self.current_stroke {
            Some(stroke) => ToolResponse::mark(LiveMark::Segment(stroke.extend(pos))),
            None => ToolResponse::none(),
        }
    }

    fn on_pointer_up(&mut self, _settings: &ToolSettings) -> ToolResponse {
        match self.current_stroke.take() {
            Some(stroke) => ToolResponse::command(Command::AddShape(stroke.finish())),
            None => ToolResponse::none(),
        }
    }

    fn cancel(&mut self) -> bool {
        self.current_stroke.take().is_some()
    }
}
