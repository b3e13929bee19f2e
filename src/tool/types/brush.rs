use crate::grid::PixelGrid;
use crate::pixel::Pixel;
use super::ToolKind;

/// Paints a single cell with the brush or eraser.
///
/// The eraser ignores `color` and always writes the background. Points outside the
/// grid are dropped, since pointer motion routinely leaves the canvas mid-stroke.
/// Returns whether a cell was written.
pub fn apply_point(grid: &mut PixelGrid, tool: ToolKind, x: i64, y: i64, color: Pixel) -> bool {
    let color = effective_color(tool, color);
    grid.set_clipped(x, y, color)
}

/// The color a tool actually lays down.
pub fn effective_color(tool: ToolKind, color: Pixel) -> Pixel {
    match tool {
        ToolKind::Eraser => Pixel::BACKGROUND,
        _ => color,
    }
}
