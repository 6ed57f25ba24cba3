use egui::{Color32, Rect, Sense, pos2};

use crate::app::WhiteboardApp;
use crate::input::route_event;

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let canvas_rect = response.rect;

        let (whiteboard, input_handler, texture_manager) = app.canvas_parts();

        let width = canvas_rect.width().floor().max(1.0) as u32;
        let height = canvas_rect.height().floor().max(1.0) as u32;
        if let Err(err) = whiteboard.bind_surface(width, height) {
            log::error!("Could not bind surface: {err}");
            return;
        }

        for event in input_handler.process_input(ctx, canvas_rect) {
            route_event(&event, whiteboard);
        }

        let revision = whiteboard.surface_revision();
        if let Some(surface) = whiteboard.surface() {
            let texture = texture_manager.texture_for(ctx, surface, revision);
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            let image_rect = Rect::from_min_size(
                canvas_rect.min,
                egui::vec2(surface.width() as f32, surface.height() as f32),
            );
            painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
            painter.image(texture, image_rect, uv, Color32::WHITE);
        }

        if whiteboard.is_drawing() {
            ctx.request_repaint();
        }
    });
}
