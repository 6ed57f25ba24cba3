use egui::{Button, RichText, Slider};

use crate::app::WhiteboardApp;
use crate::palette::PRESET_COLORS;
use crate::shape::ShapeStampKind;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let active = app.whiteboard().tool();

            for kind in [ToolKind::Freehand, ToolKind::Eraser] {
                if ui.selectable_label(active == kind, kind.name()).clicked() {
                    log::info!("Tool selected from UI: {}", kind.name());
                    app.whiteboard_mut().select_tool(kind);
                }
            }

            // Menu placement stamps a shape without leaving the current tool.
            ui.menu_button(RichText::new("Shapes").strong(), |ui| {
                for kind in ShapeStampKind::ALL {
                    if ui.button(kind.name()).clicked() {
                        app.whiteboard_mut().add_shape(kind);
                        ui.close_menu();
                    }
                }
            });

            ui.separator();

            let current = app.whiteboard().color();
            for (name, color) in PRESET_COLORS {
                let swatch = Button::new(RichText::new("■").color(color).size(18.0))
                    .selected(current == color);
                if ui.add(swatch).on_hover_text(name).clicked() {
                    app.whiteboard_mut().select_color(color);
                }
            }

            ui.separator();

            let (min, max) = app.whiteboard().config().stroke_width_range();
            let mut width = app.whiteboard().stroke_width();
            if ui.add(Slider::new(&mut width, min..=max).step_by(1.0).text("Width")).changed() {
                app.whiteboard_mut().select_stroke_width(width);
            }

            ui.separator();

            let can_undo = app.whiteboard().can_undo();
            let can_redo = app.whiteboard().can_redo();
            if ui.add_enabled(can_undo, Button::new("Undo")).clicked() {
                app.whiteboard_mut().undo();
            }
            if ui.add_enabled(can_redo, Button::new("Redo")).clicked() {
                app.whiteboard_mut().redo();
            }

            if ui.button("Download").clicked() {
                app.download();
            }
            if ui.button("Clear").clicked() {
                app.whiteboard_mut().clear();
                app.set_status("Cleared");
            }
        });

        ui.horizontal(|ui| {
            let whiteboard = app.whiteboard();
            ui.label(format!("Tool: {}", whiteboard.tool().name()));
            ui.label(format!("(State: {})", whiteboard.active_tool().current_state_name()));
            ui.label(format!("Shapes: {}", whiteboard.shapes().len()));
            ui.label(format!("Undo stack size: {}", whiteboard.history().undo_stack().len()));
            ui.label(format!("Redo stack size: {}", whiteboard.history().redo_stack().len()));
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });

        egui::CollapsingHeader::new("History").show(ui, |ui| {
            let history = app.whiteboard().history();
            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.undo_stack();
                    let redo_stack = history.redo_stack();
                    for i in 0..undo_stack.len().max(redo_stack.len()) {
                        ui.label(undo_stack.get(i).map(|cmd| cmd.label()).unwrap_or_default());
                        ui.label(redo_stack.get(i).map(|cmd| cmd.label()).unwrap_or_default());
                        ui.end_row();
                    }
                });
        });
    });
}
