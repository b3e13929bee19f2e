use crate::error::{EditorError, Result};
use crate::pixel::Pixel;

/// The square pixel matrix of a single animation frame.
///
/// Cells are stored column by column so that `cells[x * side + y]` matches the
/// `[x][y]` layout of project files. Cloning is always deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    side: usize,
    cells: Vec<Pixel>,
}

impl PixelGrid {
    /// Creates a background-filled grid with `side` cells per edge.
    ///
    /// A side of zero is bumped to one, a grid is never empty.
    pub fn new(side: usize) -> Self {
        Self::filled(side, Pixel::BACKGROUND)
    }

    pub fn filled(side: usize, pixel: Pixel) -> Self {
        let side = side.max(1);
        Self {
            side,
            cells: vec![pixel; side * side],
        }
    }

    /// Number of cells per edge
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.side as u64 && (y as u64) < self.side as u64
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.side && y < self.side {
            Ok(x * self.side + y)
        } else {
            Err(EditorError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                side: self.side,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Pixel> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = pixel;
        Ok(())
    }

    /// Signed lookup used by the tools; `None` outside the grid.
    pub(crate) fn get_clipped(&self, x: i64, y: i64) -> Option<Pixel> {
        self.contains(x, y)
            .then(|| self.cells[x as usize * self.side + y as usize])
    }

    /// Signed write used by the tools; silently ignores cells outside the grid.
    /// Returns whether a cell was written.
    pub(crate) fn set_clipped(&mut self, x: i64, y: i64, pixel: Pixel) -> bool {
        if self.contains(x, y) {
            self.cells[x as usize * self.side + y as usize] = pixel;
            true
        } else {
            false
        }
    }

    /// Resets every cell to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.cells.fill(pixel);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|p| p.is_background())
    }

    /// Iterates `(x, y, pixel)` column by column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, pixel)| (i / side, i % side, *pixel))
    }

    /// One column (fixed `x`) of the grid.
    pub fn column(&self, x: usize) -> Option<&[Pixel]> {
        (x < self.side).then(|| &self.cells[x * self.side..(x + 1) * self.side])
    }
}
