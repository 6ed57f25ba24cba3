use egui::Color32;
use tiny_skia::{LineCap, Path, PathBuilder};

use crate::document::Document;
use crate::shape::{Shape, ShapeKind};
use crate::surface::Surface;

/// Redraws a document onto a surface.
///
/// Rendering depends only on the document and the background setting, so two
/// renders of the same document produce identical pixels.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    background: Option<Color32>,
    renders: u64,
}

impl Renderer {
    pub fn new(background: Option<Color32>) -> Self {
        Self {
            background,
            renders: 0,
        }
    }

    /// Number of full redraws performed so far
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Clear the surface and paint every shape in insertion order.
    pub fn render(&mut self, document: &Document, surface: &mut Surface) {
        self.renders += 1;
        paint_document(document, self.background, surface);
        log::trace!("Rendered {} shapes (render #{})", document.len(), self.renders);
    }
}

/// Stateless form of [`Renderer::render`].
pub fn paint_document(document: &Document, background: Option<Color32>, surface: &mut Surface) {
    surface.clear();
    if let Some(background) = background {
        surface.fill(background);
    }
    for shape in document.shapes() {
        paint_shape(shape, surface);
    }
}

fn paint_shape(shape: &Shape, surface: &mut Surface) {
    let color = shape.color();
    let width = shape.stroke_width();

    match shape.kind() {
        ShapeKind::Freehand { path, .. } if path.len() > 1 => {
            if let Some(line) = polyline(path) {
                surface.stroke_path(&line, color, width, LineCap::Round);
            }
        }
        ShapeKind::Freehand { origin, .. } => {
            // Only the origin survives: a dot as wide as the stroke.
            if let Some(dot) = PathBuilder::from_circle(origin.x, origin.y, (width / 2.0).max(0.5)) {
                surface.fill_path(&dot, color);
            }
        }
        ShapeKind::Rectangle { rect } => {
            if let Some(r) = tiny_skia::Rect::from_xywh(rect.min.x, rect.min.y, rect.width(), rect.height()) {
                surface.stroke_path(&PathBuilder::from_rect(r), color, width, LineCap::Butt);
            }
        }
        ShapeKind::Circle { center, radius } => {
            if let Some(circle) = PathBuilder::from_circle(center.x, center.y, *radius) {
                surface.stroke_path(&circle, color, width, LineCap::Butt);
            }
        }
        ShapeKind::Triangle { rect } => {
            let [a, b, c] = ShapeKind::triangle_points(*rect);
            let mut pb = PathBuilder::new();
            pb.move_to(a.x, a.y);
            pb.line_to(b.x, b.y);
            pb.line_to(c.x, c.y);
            pb.close();
            if let Some(triangle) = pb.finish() {
                surface.stroke_path(&triangle, color, width, LineCap::Butt);
            }
        }
    }
}

fn polyline(points: &[egui::Pos2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}
