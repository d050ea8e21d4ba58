use std::time::{Duration, Instant};

/// Timing for one completed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub render_duration: Duration,
    /// Frames per second measured from the previous frame's start; `None`
    /// for the first frame.
    pub fps: Option<f32>,
}

/// Tracks frame start times to produce [`FrameStats`].
#[derive(Debug, Default)]
pub struct FrameClock {
    frames: u64,
    last_frame_start: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, frame_start: Instant, render_duration: Duration) -> FrameStats {
        let fps = self
            .last_frame_start
            .map(|previous| frame_start.saturating_duration_since(previous).as_secs_f32())
            .filter(|&seconds| seconds > 0.0)
            .map(f32::recip);

        let stats = FrameStats {
            frame_index: self.frames,
            render_duration,
            fps,
        };

        self.frames += 1;
        self.last_frame_start = Some(frame_start);
        stats
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
