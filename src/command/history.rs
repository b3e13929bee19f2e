use std::collections::VecDeque;

use crate::grid::PixelGrid;

/// Maximum number of snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded undo log of canvas snapshots.
///
/// Snapshots are taken by the editor at stroke boundaries, never by the tools. Once the
/// capacity is exceeded the oldest snapshot is dropped, regardless of how often it was used.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<PixelGrid>,
}

impl History {
    /// Creates a history holding `initial` as its only restorable state.
    pub fn new(initial: &PixelGrid) -> Self {
        let mut snapshots = VecDeque::with_capacity(HISTORY_CAPACITY + 1);
        snapshots.push_back(initial.clone());
        Self { snapshots }
    }

    /// Records a deep copy of `grid`, evicting the oldest snapshots beyond capacity.
    pub fn snapshot(&mut self, grid: &PixelGrid) {
        self.snapshots.push_back(grid.clone());
        while self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.pop_front();
        }
    }

    /// Steps back one snapshot and returns the grid to restore.
    ///
    /// With a single snapshot left nothing is popped and that snapshot is returned as is.
    pub fn undo(&mut self) -> Option<PixelGrid> {
        if self.snapshots.len() > 1 {
            self.snapshots.pop_back();
        }
        self.snapshots.back().cloned()
    }

    /// Whether `undo` would actually step back.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Forget everything and start over from `grid`.
    pub fn reset(&mut self, grid: &PixelGrid) {
        self.snapshots.clear();
        self.snapshots.push_back(grid.clone());
    }

    pub fn top(&self) -> Option<&PixelGrid> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
