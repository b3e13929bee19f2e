use crate::error::{EditorError, Result};
use crate::grid::PixelGrid;

/// The frames of an animation and the cursor of the frame being edited.
///
/// Never empty, and every frame has the same side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<PixelGrid>,
    current: usize,
}

impl FrameSequence {
    /// A single blank frame of the given side.
    pub fn new(side: usize) -> Self {
        Self {
            frames: vec![PixelGrid::new(side)],
            current: 0,
        }
    }

    /// Builds a sequence from existing frames, cursor on the first one.
    pub fn from_frames(frames: Vec<PixelGrid>) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Err(EditorError::Format("a project needs at least one frame".to_owned()));
        };
        let side = first.side();
        if let Some((index, frame)) = frames.iter().enumerate().find(|(_, f)| f.side() != side) {
            return Err(EditorError::Format(format!(
                "frame {index} is {0}x{0}, expected {side}x{side}",
                frame.side()
            )));
        }
        Ok(Self { frames, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// A sequence holds at least one frame, so this is false.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn side(&self) -> usize {
        self.frames[0].side()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &PixelGrid {
        &self.frames[self.current]
    }

    pub fn current_mut(&mut self) -> &mut PixelGrid {
        &mut self.frames[self.current]
    }

    pub fn frames(&self) -> &[PixelGrid] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&PixelGrid> {
        self.frames.get(index)
    }

    /// Appends a blank frame and makes it current.
    pub fn add_frame(&mut self) {
        self.frames.push(PixelGrid::new(self.side()));
        self.current = self.frames.len() - 1;
        log::debug!("Added frame {}/{}", self.current + 1, self.frames.len());
    }

    /// Removes the current frame unless it is the only one.
    /// Returns whether a frame was removed.
    pub fn remove_frame(&mut self) -> bool {
        if self.frames.len() <= 1 {
            log::warn!("Refusing to remove the last remaining frame");
            return false;
        }
        self.frames.remove(self.current);
        if self.current >= self.frames.len() {
            self.current = self.frames.len() - 1;
        }
        log::debug!("Removed frame, now at {}/{}", self.current + 1, self.frames.len());
        true
    }

    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Steps back one frame; no-op on the first frame.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one frame; no-op on the last frame.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.frames.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one frame, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.frames.len();
    }

    /// Throws away every frame and starts over with one blank frame of `side`.
    pub fn resize(&mut self, side: usize) {
        *self = Self::new(side);
        log::info!("Canvas resized to {0}x{0}, all frames discarded", self.side());
    }
}
