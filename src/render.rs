//! Render data handed to the UI host. The host owns the painter; the editor only
//! describes what to draw.

use egui::{Color32, ColorImage, Pos2, pos2};

use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::tool::ToolKind;

/// Grid lines are only drawn when a cell is at least this many points wide.
pub const MIN_GRID_PIXEL_SIZE: u32 = 4;

/// One texel per cell, row-major as egui expects.
pub fn frame_image(grid: &PixelGrid) -> ColorImage {
    let side = grid.side();
    let mut image = ColorImage::new([side, side], Color32::WHITE);
    for (x, y, pixel) in grid.iter() {
        image.pixels[y * side + x] = pixel.into();
    }
    image
}

/// Cell separators for a canvas of `side` cells drawn at `pixel_size` points per cell,
/// relative to the canvas origin. Empty when cells are too small to separate.
pub fn grid_lines(side: usize, pixel_size: u32) -> Vec<[Pos2; 2]> {
    if pixel_size < MIN_GRID_PIXEL_SIZE {
        return Vec::new();
    }
    let step = pixel_size as f32;
    let extent = side as f32 * step;
    (0..=side)
        .flat_map(|i| {
            let offset = i as f32 * step;
            [
                [pos2(offset, 0.0), pos2(offset, extent)],
                [pos2(0.0, offset), pos2(extent, offset)],
            ]
        })
        .collect()
}

/// Swatch colors for the palette panel, in palette order.
pub fn palette_swatches(palette: &Palette) -> Vec<Color32> {
    palette.colors.iter().map(|&c| c.into()).collect()
}

/// "Frame: 2/5"
pub fn frame_label(current: usize, total: usize) -> String {
    format!("Frame: {}/{}", current + 1, total)
}

/// "Tool: brush | Size: 32x32"
pub fn status_line(tool: ToolKind, side: usize) -> String {
    format!("Tool: {tool} | Size: {side}x{side}")
}
