use std::str::FromStr;

use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::{FreehandCapture, WhiteboardConfig};
use crate::error::WhiteboardError;
use crate::shape::ShapeStampKind;
use crate::stroke::LiveSegment;

mod eraser_tool;
mod freehand_tool;
mod shape_stamp_tool;

pub use eraser_tool::EraserTool;
pub use freehand_tool::FreehandTool;
pub use shape_stamp_tool::ShapeStampTool;

/// Which interpretation is applied to pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Freehand,
    Eraser,
    ShapeStamp(ShapeStampKind),
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freehand => "Pencil",
            Self::Eraser => "Eraser",
            Self::ShapeStamp(kind) => kind.name(),
        }
    }
}

impl FromStr for ToolKind {
    type Err = WhiteboardError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id.trim().to_ascii_lowercase().as_str() {
            "pencil" | "freehand" => Ok(Self::Freehand),
            "eraser" => Ok(Self::Eraser),
            "rectangle" => Ok(Self::ShapeStamp(ShapeStampKind::Rectangle)),
            "circle" => Ok(Self::ShapeStamp(ShapeStampKind::Circle)),
            "triangle" => Ok(Self::ShapeStamp(ShapeStampKind::Triangle)),
            _ => Err(WhiteboardError::UnknownTool(id.to_owned())),
        }
    }
}

/// Settings a tool reads when it handles input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub color: Color32,
    pub stroke_width: f32,
    pub capture: FreehandCapture,
    pub eraser_size: f32,
    pub eraser_offset: f32,
}

impl ToolSettings {
    pub fn from_config(config: &WhiteboardConfig) -> Self {
        Self {
            color: config.default_color,
            stroke_width: config.clamp_stroke_width(config.default_stroke_width),
            capture: config.freehand_capture,
            eraser_size: config.eraser_size,
            eraser_offset: config.eraser_offset,
        }
    }
}

/// A direct raster change that bypasses the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveMark {
    Segment(LiveSegment),
    Erase(Rect),
}

/// What a tool wants done in response to one input event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolResponse {
    /// Paint straight onto the surface
    pub mark: Option<LiveMark>,
    /// Commit to the document and history
    pub command: Option<Command>,
}

impl ToolResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn mark(mark: LiveMark) -> Self {
        Self {
            mark: Some(mark),
            command: None,
        }
    }

    pub fn command(command: Command) -> Self {
        Self {
            mark: None,
            command: Some(command),
        }
    }
}

/// Tool trait defines the interface for all drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// True while a pointer interaction is in progress.
    fn is_drawing(&self) -> bool;

    /// Handle pointer press on the surface.
    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse;

    /// Handle pointer movement, pressed or not.
    fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse;

    /// Handle pointer release and finalize the interaction.
    fn on_pointer_up(&mut self, settings: &ToolSettings) -> ToolResponse;

    /// Abandon the interaction without committing anything.
    /// Returns true if there was one to abandon.
    fn cancel(&mut self) -> bool;
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Freehand(FreehandTool),
    Eraser(EraserTool),
    ShapeStamp(ShapeStampTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::from_kind(ToolKind::default())
    }
}

impl ToolType {
    /// Create a fresh tool in its idle state
    pub fn from_kind(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Freehand => Self::Freehand(FreehandTool::new()),
            ToolKind::Eraser => Self::Eraser(EraserTool::new()),
            ToolKind::ShapeStamp(kind) => Self::ShapeStamp(ShapeStampTool::new(kind)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Freehand(_) => ToolKind::Freehand,
            Self::Eraser(_) => ToolKind::Eraser,
            Self::ShapeStamp(tool) => ToolKind::ShapeStamp(tool.stamp_kind()),
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        if self.is_drawing() { "Drawing" } else { "Idle" }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Freehand(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
            Self::ShapeStamp(tool) => tool.name(),
        }
    }

    fn is_drawing(&self) -> bool {
        match self {
            Self::Freehand(tool) => tool.is_drawing(),
            Self::Eraser(tool) => tool.is_drawing(),
            Self::ShapeStamp(tool) => tool.is_drawing(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse {
        match self {
            Self::Freehand(tool) => tool.on_pointer_down(pos, settings),
            Self::Eraser(tool) => tool.on_pointer_down(pos, settings),
            Self::ShapeStamp(tool) => tool.on_pointer_down(pos, settings),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> ToolResponse {
        match self {
            Self::Freehand(tool) => tool.on_pointer_move(pos, settings),
            Self::Eraser(tool) => tool.on_pointer_move(pos, settings),
            Self::ShapeStamp(tool) => tool.on_pointer_move(pos, settings),
        }
    }

    fn on_pointer_up(&mut self, settings: &ToolSettings) -> ToolResponse {
        match self {
            Self::Freehand(tool) => tool.on_pointer_up(settings),
            Self::Eraser(tool) => tool.on_pointer_up(settings),
            Self::ShapeStamp(tool) => tool.on_pointer_up(settings),
        }
    }

    fn cancel(&mut self) -> bool {
        match self {
            Self::Freehand(tool) => tool.cancel(),
            Self::Eraser(tool) => tool.cancel(),
            Self::ShapeStamp(tool) => tool.cancel(),
        }
    }
}
