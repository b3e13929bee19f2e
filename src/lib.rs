#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod codec;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod frames;
pub mod grid;
pub mod host;
pub mod input;
pub mod palette;
pub mod pixel;
pub mod render;
pub mod tool;
pub mod util;

pub use animation::AnimationClock;
pub use command::{Command, History};
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use event::{EditorEvent, EventBus};
pub use frames::FrameSequence;
pub use grid::PixelGrid;
pub use host::HostDialogs;
pub use input::InputEvent;
pub use palette::Palette;
pub use pixel::Pixel;
pub use tool::{ToolKind, ToolState};
