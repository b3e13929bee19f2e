pub mod types;
mod state;

pub use state::{ActiveStroke, ToolState};
pub use types::ToolKind;

// Re-export the tool algorithms
pub use types::brush::{apply_point, effective_color};
pub use types::fill::flood_fill;
pub use types::line::{line_points, rasterize_line};
