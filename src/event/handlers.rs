use crate::event::{EditorEvent, EventHandler};

/// Mirrors editor events into the log, for hosts without a status bar.
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::Message { title, body } => log::info!("{title}: {body}"),
            EditorEvent::FrameChanged { current, total } => {
                log::debug!("Frame: {}/{}", current + 1, total)
            }
            other => log::trace!("{other:?}"),
        }
    }
}
