use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::pixel::Pixel;
use crate::tool::ToolKind;

/// Discrete editor actions issued by the UI host (buttons, dropdowns, sliders, shortcuts).
///
/// Pointer input on the canvas goes through `InputEvent` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Change the active tool
    SelectTool(ToolKind),

    /// Set the drawing color directly
    SetColor(Pixel),

    /// Ask the host's color dialog for a new drawing color
    PickColor,

    /// Switch to a built-in palette by name
    SelectPalette(String),

    /// Use a swatch of the current palette as the drawing color
    PickPaletteColor(usize),

    /// Append a blank frame and switch to it
    AddFrame,

    /// Remove the current frame (never the last one)
    RemoveFrame,

    PreviousFrame,
    NextFrame,
    GoToFrame(usize),

    /// Start or stop playback
    TogglePlayback,

    /// Set playback speed in frames per second
    SetSpeed(u32),

    /// Replace the canvas with a blank one of the given side, discarding all frames
    ResizeCanvas(usize),

    Undo,

    ExportPng,
    ExportGif,
    SaveProject,

    /// Ask the host's file dialog for a project to open
    LoadProject,

    /// Open a project from a known path
    LoadProjectFrom(PathBuf),
}
