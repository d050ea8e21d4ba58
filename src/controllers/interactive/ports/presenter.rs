use std::error::Error;

use crate::controllers::interactive::data::frame_stats::FrameStats;
use crate::core::data::frame_buffer::FrameBuffer;

/// Receives every finished frame. The buffer is only lent for the call.
pub trait FramePresenterPort {
    type Failure: Error;

    fn present(&mut self, frame: &FrameBuffer, stats: &FrameStats) -> Result<(), Self::Failure>;
}
