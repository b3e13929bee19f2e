use egui::Color32;
use serde::{Deserialize, Serialize};

/// A single opaque RGB cell value.
///
/// Serialized as a `[r, g, b]` array, which is how cells appear in project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// The unpainted cell value.
    pub const BACKGROUND: Pixel = Pixel::new(255, 255, 255);
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Pixel> for Color32 {
    fn from(pixel: Pixel) -> Self {
        Color32::from_rgb(pixel.r, pixel.g, pixel.b)
    }
}

/// Drops alpha; the canvas has no transparency.
impl From<Color32> for Pixel {
    fn from(color: Color32) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }
}

impl From<Pixel> for image::Rgb<u8> {
    fn from(pixel: Pixel) -> Self {
        image::Rgb(pixel.to_array())
    }
}
