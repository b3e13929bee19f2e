use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_FPS;
use crate::codec::EXPORT_SCALE;
use crate::error::Result;
use crate::palette::DEFAULT_PALETTE;

/// Canvas sizes offered by the editor.
pub const CANVAS_SIZES: [usize; 2] = [16, 32];

/// Startup settings for an editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct EditorConfig {
    /// Cells per canvas edge
    pub canvas_size: usize,
    /// On-screen size of one cell, in points
    pub pixel_size: u32,
    pub fps: u32,
    pub export_scale: u32,
    /// Where exports and saved projects are written
    pub output_dir: PathBuf,
    pub palette: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 32,
            pixel_size: 20,
            fps: DEFAULT_FPS,
            export_scale: EXPORT_SCALE,
            output_dir: PathBuf::from("."),
            palette: DEFAULT_PALETTE.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
