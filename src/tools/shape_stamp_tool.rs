use egui::Pos2;

use super::{Tool, ToolResponse, ToolSettings};
use crate::command::Command;
use crate::shape::{Shape, ShapeStampKind};

/// Menu-driven shape placement.
///
/// Stamping happens when the tool is selected, at the default position and
/// size; there is no placement gesture, so pointer input is ignored.
#[derive(Debug, Clone)]
pub struct ShapeStampTool {
    kind: ShapeStampKind,
}

impl ShapeStampTool {
    pub fn new(kind: ShapeStampKind) -> Self {
        Self { kind }
    }

    pub fn stamp_kind(&self) -> ShapeStampKind {
        self.kind
    }

    /// The command committing one default-placed shape.
    pub fn stamp(&self, settings: &ToolSettings) -> Command {
        Command::AddShape(Shape::stamp(self.kind, settings.color, settings.stroke_width))
    }
}

impl Tool for ShapeStampTool {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn is_drawing(&self) -> bool {
        false
    }

    fn on_pointer_down(&mut self, _pos: Pos2, _settings: &ToolSettings) -> ToolResponse {
        log::debug!("{} stamp ignores pointer input", self.kind.name());
        ToolResponse::none()
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _settings: &ToolSettings) -> ToolResponse {
        ToolResponse::none()
    }

    fn on_pointer_up(&mut self, _settings: &ToolSettings) -> ToolResponse {
        ToolResponse::none()
    }

    fn cancel(&mut self) -> bool {
        false
    }
}
