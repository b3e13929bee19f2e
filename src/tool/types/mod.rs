pub mod brush;
pub mod fill;
pub mod line;

pub use brush::apply_point;
pub use fill::flood_fill;
pub use line::{line_points, rasterize_line};

use serde::{Serialize, Deserialize};

/// The drawing tools the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Fill,
    Line,
    Eraser,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Eraser => "eraser",
        }
    }

    /// Tools that keep painting while the pointer is dragged.
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
