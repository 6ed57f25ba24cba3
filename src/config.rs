use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{WhiteboardError, WhiteboardResult};

/// How much of a freehand interaction is stored when it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreehandCapture {
    /// Only the origin point and width are kept; a redraw shows a dot.
    #[default]
    OriginOnly,
    /// The ordered traced points are kept and redrawn as a polyline.
    FullPath,
}

/// How shapes inserted by remote peers interact with the local history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteHistoryPolicy {
    /// Remote inserts are not undoable locally and clear both local stacks.
    #[default]
    Barrier,
    /// Remote inserts are recorded like local commits.
    Shared,
}

/// Settings for one whiteboard session.
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub default_color: Color32,
    pub default_stroke_width: f32,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
    /// Side of the square the eraser clears per move
    pub eraser_size: f32,
    /// Offset of the erased square's corner from the pointer
    pub eraser_offset: f32,
    pub background: Option<Color32>,
    pub freehand_capture: FreehandCapture,
    pub remote_history: RemoteHistoryPolicy,
    pub export_file_name: String,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            surface_width: 900,
            surface_height: 600,
            default_color: Color32::BLACK,
            default_stroke_width: 2.0,
            min_stroke_width: 1.0,
            max_stroke_width: 10.0,
            eraser_size: 30.0,
            eraser_offset: 10.0,
            background: None,
            freehand_capture: FreehandCapture::default(),
            remote_history: RemoteHistoryPolicy::default(),
            export_file_name: "drawing.png".to_owned(),
        }
    }
}

impl WhiteboardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> WhiteboardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that no session can work with.
    pub fn validate(&self) -> WhiteboardResult<()> {
        let (min, max) = (self.min_stroke_width, self.max_stroke_width);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(WhiteboardError::InvalidConfig(format!(
                "stroke width range {min}..={max}"
            )));
        }
        if !self.default_stroke_width.is_finite() {
            return Err(WhiteboardError::InvalidConfig(format!(
                "default stroke width {}",
                self.default_stroke_width
            )));
        }
        if !(self.eraser_size.is_finite() && self.eraser_size >= 0.0 && self.eraser_offset.is_finite()) {
            return Err(WhiteboardError::InvalidConfig(format!(
                "eraser size {} offset {}",
                self.eraser_size, self.eraser_offset
            )));
        }
        Ok(())
    }

    /// Load a config file written as JSON.
    pub fn load(path: impl AsRef<Path>) -> WhiteboardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(WhiteboardError::ConfigIo)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded whiteboard config from {}", path.display());
        Ok(config)
    }

    /// The stroke width bounds, in ascending order even if configured reversed.
    pub fn stroke_width_range(&self) -> (f32, f32) {
        let (a, b) = (self.min_stroke_width, self.max_stroke_width);
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Clamp a requested stroke width into the configured range.
    ///
    /// Never panics, even for a config that skipped [`Self::validate`].
    pub fn clamp_stroke_width(&self, width: f32) -> f32 {
        let (min, max) = self.stroke_width_range();
        width.max(min).min(max)
    }
}
