use egui::{Context, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// The parts of one frame's pointer state the canvas cares about
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input for a canvas occupying `canvas_rect`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.translate(PointerSnapshot::from_egui(ctx), canvas_rect)
    }

    /// Turn one pointer snapshot into events, in press, move, release order.
    pub fn translate(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = snapshot.hover_pos.filter(|pos| canvas_rect.contains(*pos));
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if inside.is_none() && self.last_pointer_pos.take().is_some() {
            events.push(InputEvent::PointerLeave);
        }

        if let Some(pos) = inside {
            if snapshot.primary_pressed {
                events.push(InputEvent::PointerDown {
                    position: to_local(pos),
                });
            }
            if self.last_pointer_pos != Some(pos) {
                events.push(InputEvent::PointerMove {
                    position: to_local(pos),
                });
            }
            self.last_pointer_pos = Some(pos);
        }

        if snapshot.primary_released {
            events.push(InputEvent::PointerUp);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(100.0, 50.0), pos2(500.0, 450.0))
    }

    #[test]
    fn press_is_reported_in_surface_coordinates() {
        let mut handler = InputHandler::new();
        let events = handler.translate(
            PointerSnapshot {
                hover_pos: Some(pos2(110.0, 60.0)),
                primary_pressed: true,
                primary_released: false,
            },
            canvas(),
        );

        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { position: pos2(10.0, 10.0) },
                InputEvent::PointerMove { position: pos2(10.0, 10.0) },
            ]
        );
    }

    #[test]
    fn standing_still_produces_no_moves() {
        let mut handler = InputHandler::new();
        let snapshot = PointerSnapshot {
            hover_pos: Some(pos2(200.0, 200.0)),
            ..Default::default()
        };
        handler.translate(snapshot, canvas());
        assert!(handler.translate(snapshot, canvas()).is_empty());
    }

    #[test]
    fn leaving_the_canvas_is_reported_once() {
        let mut handler = InputHandler::new();
        handler.translate(
            PointerSnapshot {
                hover_pos: Some(pos2(200.0, 200.0)),
                ..Default::default()
            },
            canvas(),
        );

        let outside = PointerSnapshot {
            hover_pos: Some(pos2(10.0, 10.0)),
            ..Default::default()
        };
        assert_eq!(handler.translate(outside, canvas()), vec![InputEvent::PointerLeave]);
        assert!(handler.translate(outside, canvas()).is_empty());
    }
}
