pub mod export;
pub mod project;

pub use export::{AnimatedExport, EXPORT_SCALE, to_animated_image, to_static_image};
pub use project::{LoadedProject, ProjectDocument};
