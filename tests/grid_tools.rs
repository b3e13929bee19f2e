use proptest::prelude::*;
use spritelab::tool::{self, ToolKind};
use spritelab::{EditorError, Pixel, PixelGrid};

const RED: Pixel = Pixel::new(255, 0, 0);
const BLUE: Pixel = Pixel::new(0, 0, 255);

// Helper to collect every painted (non-background) cell
fn painted(grid: &PixelGrid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, p)| !p.is_background())
        .map(|(x, y, _)| (x, y))
        .collect()
}

fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
    (1usize..7).prop_flat_map(|side| {
        prop::collection::vec(0u8..3, side * side).prop_map(move |cells| {
            let mut grid = PixelGrid::new(side);
            for (i, c) in cells.into_iter().enumerate() {
                let pixel = match c {
                    0 => Pixel::BACKGROUND,
                    1 => Pixel::BLACK,
                    _ => RED,
                };
                grid.set(i / side, i % side, pixel).unwrap();
            }
            grid
        })
    })
}

#[test]
fn test_new_grid_is_background() {
    let grid = PixelGrid::new(16);
    assert_eq!(grid.side(), 16);
    assert!(grid.is_blank());
    assert_eq!(grid.iter().count(), 256);
}

#[test]
fn test_direct_access_out_of_bounds_fails() {
    let mut grid = PixelGrid::new(4);
    assert!(matches!(grid.get(4, 0), Err(EditorError::OutOfBounds { x: 4, y: 0, side: 4 })));
    assert!(matches!(grid.set(0, 7, RED), Err(EditorError::OutOfBounds { .. })));
    assert!(grid.is_blank());
}

#[test]
fn test_clone_is_deep() {
    let mut grid = PixelGrid::new(3);
    let copy = grid.clone();
    grid.set(1, 1, RED).unwrap();
    assert_eq!(copy.get(1, 1).unwrap(), Pixel::BACKGROUND);
    assert_eq!(grid.get(1, 1).unwrap(), RED);
}

#[test]
fn test_fill_resets_every_cell() {
    let mut grid = PixelGrid::new(3);
    grid.set(0, 2, RED).unwrap();
    grid.fill(BLUE);
    assert!(grid.iter().all(|(_, _, p)| p == BLUE));
    grid.fill(Pixel::BACKGROUND);
    assert!(grid.is_blank());
}

#[test]
fn test_brush_paints_single_cell() {
    let mut grid = PixelGrid::new(4);
    assert!(tool::apply_point(&mut grid, ToolKind::Brush, 1, 1, RED));
    assert_eq!(grid.get(1, 1).unwrap(), RED);
    assert_eq!(grid.get(0, 0).unwrap(), Pixel::BACKGROUND);
    assert_eq!(painted(&grid), vec![(1, 1)]);
}

#[test]
fn test_eraser_ignores_requested_color() {
    let mut grid = PixelGrid::filled(4, BLUE);
    tool::apply_point(&mut grid, ToolKind::Eraser, 2, 3, RED);
    assert_eq!(grid.get(2, 3).unwrap(), Pixel::BACKGROUND);
}

#[test]
fn test_point_outside_canvas_is_clipped() {
    let mut grid = PixelGrid::new(4);
    assert!(!tool::apply_point(&mut grid, ToolKind::Brush, -1, 2, RED));
    assert!(!tool::apply_point(&mut grid, ToolKind::Brush, 4, 0, RED));
    assert!(grid.is_blank());
}

#[test]
fn test_flood_fill_open_canvas() {
    let mut grid = PixelGrid::new(3);
    let painted = tool::flood_fill(&mut grid, 0, 0, BLUE);
    assert_eq!(painted, 9);
    assert!(grid.iter().all(|(_, _, p)| p == BLUE));
}

#[test]
fn test_flood_fill_stops_at_barrier() {
    let mut grid = PixelGrid::new(3);
    for y in 0..3 {
        grid.set(1, y, Pixel::BLACK).unwrap();
    }
    assert_eq!(tool::flood_fill(&mut grid, 0, 0, BLUE), 3);
    for y in 0..3 {
        assert_eq!(grid.get(0, y).unwrap(), BLUE);
        assert_eq!(grid.get(1, y).unwrap(), Pixel::BLACK);
        assert_eq!(grid.get(2, y).unwrap(), Pixel::BACKGROUND);
    }
}

#[test]
fn test_flood_fill_ignores_diagonals() {
    let mut grid = PixelGrid::new(2);
    grid.set(1, 0, Pixel::BLACK).unwrap();
    grid.set(0, 1, Pixel::BLACK).unwrap();
    assert_eq!(tool::flood_fill(&mut grid, 0, 0, BLUE), 1);
    assert_eq!(grid.get(1, 1).unwrap(), Pixel::BACKGROUND);
}

#[test]
fn test_flood_fill_same_color_is_noop() {
    let mut grid = PixelGrid::new(3);
    grid.set(2, 2, RED).unwrap();
    let before = grid.clone();
    assert_eq!(tool::flood_fill(&mut grid, 0, 0, Pixel::BACKGROUND), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_flood_fill_outside_canvas_is_noop() {
    let mut grid = PixelGrid::new(3);
    assert_eq!(tool::flood_fill(&mut grid, 5, -1, RED), 0);
    assert!(grid.is_blank());
}

#[test]
fn test_flood_fill_large_canvas() {
    let mut grid = PixelGrid::new(256);
    assert_eq!(tool::flood_fill(&mut grid, 128, 128, RED), 256 * 256);
}

#[test]
fn test_line_points_known_shape() {
    let points = tool::line_points((0, 0), (3, 1));
    assert_eq!(points, vec![(0, 0), (1, 0), (2, 1), (3, 1)]);

    let reversed = tool::line_points((3, 1), (0, 0));
    assert_eq!(reversed, vec![(3, 1), (2, 1), (1, 0), (0, 0)]);
}

#[test]
fn test_line_single_point() {
    assert_eq!(tool::line_points((2, 2), (2, 2)), vec![(2, 2)]);
}

#[test]
fn test_line_is_clipped_to_canvas() {
    let mut grid = PixelGrid::new(4);
    let written = tool::rasterize_line(&mut grid, (-2, 1), (6, 1), RED);
    assert_eq!(written, 4);
    assert_eq!(painted(&grid), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
}

proptest! {
    #[test]
    fn set_then_get_returns_pixel(side in 1usize..20, x in 0usize..20, y in 0usize..20, r: u8, g: u8, b: u8) {
        let mut grid = PixelGrid::new(side);
        let (x, y) = (x % side, y % side);
        let pixel = Pixel::new(r, g, b);
        grid.set(x, y, pixel).unwrap();
        prop_assert_eq!(grid.get(x, y).unwrap(), pixel);
    }

    #[test]
    fn flood_fill_is_idempotent(grid in grid_strategy(), x in 0i64..7, y in 0i64..7) {
        let mut once = grid.clone();
        tool::flood_fill(&mut once, x, y, BLUE);
        let mut twice = once.clone();
        tool::flood_fill(&mut twice, x, y, BLUE);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn line_is_symmetric(x1 in -5i64..20, y1 in -5i64..20, x2 in -5i64..20, y2 in -5i64..20) {
        let mut forward = tool::line_points((x1, y1), (x2, y2));
        let mut backward = tool::line_points((x2, y2), (x1, y1));
        forward.sort_unstable();
        backward.sort_unstable();
        prop_assert_eq!(forward, backward);

        let mut a = PixelGrid::new(16);
        let mut b = PixelGrid::new(16);
        tool::rasterize_line(&mut a, (x1, y1), (x2, y2), RED);
        tool::rasterize_line(&mut b, (x2, y2), (x1, y1), RED);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn line_includes_both_endpoints(x1 in -5i64..20, y1 in -5i64..20, x2 in -5i64..20, y2 in -5i64..20) {
        let points = tool::line_points((x1, y1), (x2, y2));
        prop_assert_eq!(points.first().copied(), Some((x1, y1)));
        prop_assert_eq!(points.last().copied(), Some((x2, y2)));
        let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
        prop_assert_eq!(points.len(), steps + 1);
    }
}
