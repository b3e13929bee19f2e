use crate::frames::FrameSequence;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 30;
pub const DEFAULT_FPS: u32 = 5;

/// Drives frame playback from the host's frame delta.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    playing: bool,
    fps: u32,
    accumulated: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl AnimationClock {
    pub fn new(fps: u32) -> Self {
        Self {
            playing: false,
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            accumulated: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Seconds accumulated since the last advance.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Sets the playback rate, clamped to `MIN_FPS..=MAX_FPS`.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(MIN_FPS, MAX_FPS);
    }

    // Start and stop keep the accumulator.
    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Returns the new playing state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Seconds each frame stays on screen.
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Feeds `delta_secs` of wall-clock time and advances `frames` once a frame's worth
    /// has accumulated. Returns whether the cursor moved.
    ///
    /// Any excess over the frame duration is dropped, so at most one frame advances per tick.
    pub fn tick(&mut self, delta_secs: f64, frames: &mut FrameSequence) -> bool {
        if !self.playing || frames.len() < 2 {
            return false;
        }
        self.accumulated += delta_secs;
        // Summed 1/fps deltas can land an ulp short of the frame duration.
        if self.accumulated + 1e-9 >= self.frame_duration() {
            self.accumulated = 0.0;
            frames.advance();
            true
        } else {
            false
        }
    }
}
