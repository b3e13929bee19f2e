use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// 4-connected flood fill starting at `(x, y)`.
///
/// The color under the start cell is the target. Filling with the target color, or
/// starting outside the grid, leaves the grid untouched. Uses an explicit stack so deep
/// regions cannot overflow the call stack; a recolored cell no longer matches the target,
/// so neighbors pushed twice are skipped on the second visit.
///
/// Returns the number of cells recolored.
pub fn flood_fill(grid: &mut PixelGrid, x: i64, y: i64, replacement: Pixel) -> usize {
    let Some(target) = grid.get_clipped(x, y) else {
        return 0;
    };
    if target == replacement {
        return 0;
    }

    let mut painted = 0;
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        if grid.get_clipped(x, y) != Some(target) {
            continue;
        }
        grid.set_clipped(x, y, replacement);
        painted += 1;
        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    log::debug!("Flood fill from ({x}, {y}) recolored {painted} cells");
    painted
}
