use egui::{Color32, Rect};
use tiny_skia::{BlendMode, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Transform};

use crate::error::{WhiteboardError, WhiteboardResult};
use crate::stroke::LiveSegment;

/// The raster target the renderer draws onto and export reads from.
///
/// Coordinates are surface-local pixels with the origin at the top left.
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl Surface {
    pub fn new(width: u32, height: u32) -> WhiteboardResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(WhiteboardError::InvalidSurfaceSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clear the whole surface to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Flood the whole surface with one color.
    pub fn fill(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    pub fn stroke_path(&mut self, path: &Path, color: Color32, width: f32, cap: LineCap) {
        let stroke = tiny_skia::Stroke {
            width,
            line_cap: cap,
            line_join: if cap == LineCap::Round { LineJoin::Round } else { LineJoin::Miter },
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint_for(color), &stroke, Transform::identity(), None);
    }

    pub fn fill_path(&mut self, path: &Path, color: Color32) {
        self.pixmap.fill_path(
            path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Draw one live freehand segment.
    pub fn draw_segment(&mut self, segment: &LiveSegment) {
        let mut pb = PathBuilder::new();
        pb.move_to(segment.from.x, segment.from.y);
        pb.line_to(segment.to.x, segment.to.y);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, segment.color, segment.width, LineCap::Round);
        }
    }

    /// Reset a rectangular region to transparent.
    pub fn clear_rect(&mut self, rect: Rect) {
        let Some(region) = tiny_skia::Rect::from_xywh(rect.min.x, rect.min.y, rect.width(), rect.height())
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;
        paint.anti_alias = false;
        self.pixmap.fill_rect(region, &paint, Transform::identity(), None);
    }

    /// Read one pixel back, unpremultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Unpremultiplied RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(WhiteboardError::InvalidSurfaceSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn clear_rect_only_touches_its_region() {
        let mut surface = Surface::new(50, 50).unwrap();
        surface.fill(Color32::RED);
        surface.clear_rect(Rect::from_min_max(pos2(10.0, 10.0), pos2(20.0, 20.0)));

        assert_eq!(surface.pixel(15, 15).unwrap().a(), 0);
        assert_eq!(surface.pixel(25, 25).unwrap(), Color32::RED);
        assert_eq!(surface.pixel(5, 5).unwrap(), Color32::RED);
    }

    #[test]
    fn segment_marks_pixels_along_the_line() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.draw_segment(&LiveSegment {
            from: pos2(5.0, 20.0),
            to: pos2(35.0, 20.0),
            color: Color32::BLUE,
            width: 4.0,
        });

        assert!(surface.pixel(20, 20).unwrap().a() > 0);
        assert_eq!(surface.pixel(20, 5).unwrap().a(), 0);
    }
}
