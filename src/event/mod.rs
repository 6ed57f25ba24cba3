mod bus;
mod events;

pub use bus::EventBus;
pub use events::{ChangeOrigin, EngineEvent};

/// Receives every document change the engine makes.
///
/// Handlers run synchronously inside the engine operation that caused the
/// change, so they must not call back into the engine.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EngineEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&EngineEvent),
{
    fn handle_event(&mut self, event: &EngineEvent) {
        self(event)
    }
}
