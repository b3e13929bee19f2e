mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{DocumentEvent, EditorEvent};
pub use handlers::LogEventHandler;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F: FnMut(&EditorEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
