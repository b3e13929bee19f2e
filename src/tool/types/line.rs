//! Line drawing with Bresenham's algorithm.

use crate::grid::PixelGrid;
use crate::pixel::Pixel;

const MAX_PREALLOCATED_POINTS: usize = 4096;

/// All cells on the line from `start` to `end`, both endpoints included, in travel order.
///
/// Plain Bresenham breaks ties differently depending on the direction of travel, so the
/// walk always runs from the lexicographically smaller endpoint. Swapping `start` and
/// `end` therefore yields the same cells, only reversed.
pub fn line_points(start: (i64, i64), end: (i64, i64)) -> Vec<(i64, i64)> {
    let reversed = end < start;
    let (from, to) = if reversed { (end, start) } else { (start, end) };
    let mut points = bresenham(from, to);
    if reversed {
        points.reverse();
    }
    points
}

fn bresenham((mut x, mut y): (i64, i64), (x2, y2): (i64, i64)) -> Vec<(i64, i64)> {
    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let steps = usize::try_from(dx.max(dy)).unwrap_or(0);
    let mut points = Vec::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED_POINTS));
    loop {
        points.push((x, y));
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Paints the line from `start` to `end`, clipping cells outside the grid.
/// Returns the number of cells written.
pub fn rasterize_line(
    grid: &mut PixelGrid,
    start: (i64, i64),
    end: (i64, i64),
    color: Pixel,
) -> usize {
    line_points(start, end)
        .into_iter()
        .filter(|&(x, y)| grid.set_clipped(x, y, color))
        .count()
}
