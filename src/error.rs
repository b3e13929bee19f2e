use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// Drawing tools never return these for coordinates outside the canvas, they clip instead.
/// Everything here is recoverable at the session level.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Cell ({x}, {y}) is outside the {side}x{side} canvas")]
    OutOfBounds { x: i64, y: i64, side: usize },

    #[error("Frame {index} does not exist (sequence has {len} frames)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid project file: {0}")]
    Format(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(std::io::Error::other(err))
        } else {
            Self::Format(err.to_string())
        }
    }
}

impl From<image::ImageError> for EditorError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Self::Io(io),
            other => Self::Export(other.to_string()),
        }
    }
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
