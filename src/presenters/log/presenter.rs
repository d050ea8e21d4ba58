use std::convert::Infallible;
use std::time::Duration;

use log::{debug, info};

use crate::controllers::interactive::{FramePresenterPort, FrameStats};
use crate::core::data::frame_buffer::FrameBuffer;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a digest of the frame bytes, used to compare frames in logs.
#[must_use]
pub fn frame_checksum(frame: &FrameBuffer) -> u64 {
    frame
        .as_bytes()
        .iter()
        .fold(FNV_OFFSET_BASIS, |hash, &byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

/// Headless presenter: logs timing and a checksum for each frame instead of
/// showing it, plus a frame-rate summary every `summary_interval` frames.
#[derive(Debug)]
pub struct LogPresenter {
    summary_interval: u64,
    window_frames: u64,
    window_render_time: Duration,
    last_checksum: Option<u64>,
}

impl LogPresenter {
    #[must_use]
    pub fn new(summary_interval: u64) -> Self {
        Self {
            summary_interval: summary_interval.max(1),
            window_frames: 0,
            window_render_time: Duration::ZERO,
            last_checksum: None,
        }
    }

    #[must_use]
    pub fn last_checksum(&self) -> Option<u64> {
        self.last_checksum
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new(30)
    }
}

impl FramePresenterPort for LogPresenter {
    type Failure = Infallible;

    fn present(&mut self, frame: &FrameBuffer, stats: &FrameStats) -> Result<(), Infallible> {
        let checksum = frame_checksum(frame);

        debug!(
            "Frame {}: {}x{} rendered in {:?}, checksum {:016x}",
            stats.frame_index,
            frame.width(),
            frame.height(),
            stats.render_duration,
            checksum
        );

        self.last_checksum = Some(checksum);
        self.window_frames += 1;
        self.window_render_time += stats.render_duration;

        if self.window_frames == self.summary_interval {
            let average = self.window_render_time / self.window_frames as u32;
            match stats.fps {
                Some(fps) => info!("FPS: {:.0} (average render {:?})", fps, average),
                None => info!("Average render {:?}", average),
            }
            self.window_frames = 0;
            self.window_render_time = Duration::ZERO;
        }

        Ok(())
    }
}
