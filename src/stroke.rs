use egui::{Color32, Pos2};

use crate::config::FreehandCapture;
use crate::shape::Shape;

/// A line segment drawn straight onto the surface while a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSegment {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
}

/// Accumulates one freehand interaction from pointer down to pointer up.
///
/// Color and width are captured when the stroke starts, so changing them
/// mid-stroke only affects the next one.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    origin: Pos2,
    previous: Pos2,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    capture: FreehandCapture,
}

impl StrokeBuilder {
    pub fn begin(origin: Pos2, color: Color32, width: f32, capture: FreehandCapture) -> Self {
        let points = match capture {
            FreehandCapture::OriginOnly => Vec::new(),
            FreehandCapture::FullPath => vec![origin],
        };
        Self {
            origin,
            previous: origin,
            points,
            color,
            width,
            capture,
        }
    }

    /// Advance to `pos`, returning the segment to draw for live feedback.
    pub fn extend(&mut self, pos: Pos2) -> LiveSegment {
        let segment = LiveSegment {
            from: self.previous,
            to: pos,
            color: self.color,
            width: self.width,
        };
        self.previous = pos;
        if self.capture == FreehandCapture::FullPath {
            self.points.push(pos);
        }
        segment
    }

    /// Turn the interaction into the shape to commit.
    pub fn finish(self) -> Shape {
        let path = if self.points.len() > 1 { self.points } else { Vec::new() };
        Shape::freehand(self.origin, path, self.color, self.width)
    }
}
