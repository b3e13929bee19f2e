use crate::pixel::Pixel;
use super::types::ToolKind;

/// The stroke currently held down on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveStroke {
    /// Tool used for this stroke; may differ from the selected tool (secondary button erases).
    pub tool: ToolKind,
    /// Press position for the line tool, last painted cell for freehand tools.
    pub anchor: (i64, i64),
}

/// Tool selection, drawing color and the in-progress stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    pub tool: ToolKind,
    pub color: Pixel,
    stroke: Option<ActiveStroke>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            color: Pixel::BLACK,
            stroke: None,
        }
    }
}

impl ToolState {
    pub fn stroke(&self) -> Option<ActiveStroke> {
        self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn begin_stroke(&mut self, tool: ToolKind, anchor: (i64, i64)) {
        self.stroke = Some(ActiveStroke { tool, anchor });
    }

    /// Moves the anchor of a freehand stroke.
    pub fn move_anchor(&mut self, anchor: (i64, i64)) {
        if let Some(stroke) = &mut self.stroke {
            stroke.anchor = anchor;
        }
    }

    pub fn end_stroke(&mut self) -> Option<ActiveStroke> {
        self.stroke.take()
    }
}
