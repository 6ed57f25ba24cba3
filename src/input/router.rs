use super::InputEvent;
use crate::engine::Whiteboard;

/// Routes a canvas input event to the whiteboard engine
pub fn route_event(event: &InputEvent, whiteboard: &mut Whiteboard) {
    match *event {
        InputEvent::PointerDown { position } => whiteboard.pointer_down(position),
        InputEvent::PointerMove { position } => whiteboard.pointer_move(position),
        InputEvent::PointerUp => whiteboard.pointer_up(),
        InputEvent::PointerLeave => whiteboard.pointer_leave(),
    }
}
