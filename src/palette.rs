use crate::pixel::Pixel;

/// A named, ordered list of swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [Pixel],
}

impl Palette {
    pub fn color(&self, index: usize) -> Option<Pixel> {
        self.colors.get(index).copied()
    }
}

pub const DEFAULT_PALETTE: &str = "Basic";

const BASIC: &[Pixel] = &[
    Pixel::new(0, 0, 0),
    Pixel::new(255, 255, 255),
    Pixel::new(255, 0, 0),
    Pixel::new(0, 255, 0),
    Pixel::new(0, 0, 255),
    Pixel::new(255, 255, 0),
    Pixel::new(255, 0, 255),
    Pixel::new(0, 255, 255),
    Pixel::new(128, 0, 0),
    Pixel::new(0, 128, 0),
    Pixel::new(0, 0, 128),
    Pixel::new(128, 128, 0),
];

const PASTEL: &[Pixel] = &[
    Pixel::new(255, 209, 220),
    Pixel::new(204, 255, 229),
    Pixel::new(204, 229, 255),
    Pixel::new(255, 255, 204),
    Pixel::new(229, 204, 255),
    Pixel::new(255, 229, 204),
    Pixel::new(220, 255, 209),
    Pixel::new(209, 220, 255),
    Pixel::new(255, 204, 229),
];

// The last entry repeats the second shade.
const GAME_BOY: &[Pixel] = &[
    Pixel::new(15, 56, 15),
    Pixel::new(48, 98, 48),
    Pixel::new(139, 172, 15),
    Pixel::new(155, 188, 15),
    Pixel::new(48, 98, 48),
];

const NES: &[Pixel] = &[
    Pixel::new(124, 124, 124),
    Pixel::new(0, 0, 252),
    Pixel::new(0, 0, 188),
    Pixel::new(68, 40, 188),
    Pixel::new(148, 0, 132),
    Pixel::new(168, 0, 32),
    Pixel::new(168, 16, 0),
    Pixel::new(136, 20, 0),
];

/// Every built-in palette, in menu order.
pub const PALETTES: &[Palette] = &[
    Palette { name: "Basic", colors: BASIC },
    Palette { name: "Pastel", colors: PASTEL },
    Palette { name: "Game Boy", colors: GAME_BOY },
    Palette { name: "NES", colors: NES },
];

/// Looks up a built-in palette by its exact name.
pub fn find(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}
