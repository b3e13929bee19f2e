use egui::{Key, Modifiers, PointerButton, Pos2};

use crate::command::Command;

/// Input forwarded by the UI host, with positions relative to the canvas' top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        pos: Pos2,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        pos: Pos2,
    },
    /// Mouse button was released
    PointerUp {
        pos: Pos2,
        button: PointerButton,
    },
    /// A key was pressed
    Key {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Keyboard shortcuts: Ctrl+Z undo, Ctrl+S PNG export, arrows step through frames.
pub fn shortcut(key: Key, modifiers: Modifiers) -> Option<Command> {
    let ctrl = modifiers.ctrl || modifiers.command;
    match key {
        Key::Z if ctrl => Some(Command::Undo),
        Key::S if ctrl => Some(Command::ExportPng),
        Key::ArrowLeft => Some(Command::PreviousFrame),
        Key::ArrowRight => Some(Command::NextFrame),
        _ => None,
    }
}

/// Converts raw egui events into canvas-relative `InputEvent`s
pub struct InputHandler {
    canvas_origin: Pos2,
}

impl InputHandler {
    pub fn new(canvas_origin: Pos2) -> Self {
        Self { canvas_origin }
    }

    /// Update where the canvas sits on screen
    pub fn set_canvas_origin(&mut self, origin: Pos2) {
        self.canvas_origin = origin;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        Pos2::ZERO + (pos - self.canvas_origin)
    }

    /// Translate one frame's worth of raw events, as in
    /// `ctx.input(|i| handler.translate(&i.events))`. Key releases and unrelated events are
    /// dropped.
    pub fn translate(&self, events: &[egui::Event]) -> Vec<InputEvent> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                    pos: self.to_canvas(*pos),
                }),
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => Some(InputEvent::PointerDown {
                    pos: self.to_canvas(*pos),
                    button: *button,
                }),
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: false,
                    ..
                } => Some(InputEvent::PointerUp {
                    pos: self.to_canvas(*pos),
                    button: *button,
                }),
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => Some(InputEvent::Key {
                    key: *key,
                    modifiers: *modifiers,
                }),
                _ => None,
            })
            .collect()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Pos2::ZERO)
    }
}
