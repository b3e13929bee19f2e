use crate::pixel::Pixel;
use crate::tool::ToolKind;

/// Notifications the editor broadcasts to the host after state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: ToolKind,
        new: ToolKind,
    },
    ColorChanged(Pixel),
    PaletteChanged(String),
    /// The visible frame or the frame count changed. `current` is zero-based.
    FrameChanged {
        current: usize,
        total: usize,
    },
    CanvasResized {
        side: usize,
        pixel_size: u32,
    },
    PlaybackToggled {
        playing: bool,
    },
    SpeedChanged {
        fps: u32,
    },
    HistoryChanged {
        depth: usize,
    },
    DocumentChanged(DocumentEvent),
    /// A user-facing message, e.g. an export confirmation or a load failure.
    Message {
        title: String,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Modified,
    Saved,
    Loaded,
    Exported,
}
