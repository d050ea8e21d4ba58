use std::time::Instant;

use log::trace;

use crate::controllers::interactive::data::frame_stats::{FrameClock, FrameStats};
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::transform::Transform;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::ColourPolicy;
use crate::core::navigation::NavigationCommand;

/// Owns everything a frame needs and runs the render/present cycle.
///
/// Navigation commands and rendering both take `&mut self`, so the transform
/// can never change while a frame is being computed.
#[derive(Debug)]
pub struct InteractiveController<CMap: ColourMap = ColourPolicy> {
    algorithm: EscapeTimeAlgorithm,
    colour_map: CMap,
    home: Transform,
    transform: Transform,
    frame: FrameBuffer,
    clock: FrameClock,
}

impl<CMap: ColourMap> InteractiveController<CMap> {
    pub fn new(
        algorithm: EscapeTimeAlgorithm,
        colour_map: CMap,
        home: Transform,
        frame: FrameBuffer,
    ) -> Self {
        Self {
            algorithm,
            colour_map,
            home,
            transform: home,
            frame,
            clock: FrameClock::new(),
        }
    }

    pub fn handle(&mut self, command: NavigationCommand) {
        command.apply(&mut self.transform, &self.home);
        trace!("{:?} -> {:?}", command, self.transform);
    }

    /// Computes the frame for the current transform into the owned buffer.
    pub fn render(&mut self) -> &FrameBuffer {
        render_frame(&self.transform, &self.algorithm, &self.colour_map, &mut self.frame);
        &self.frame
    }

    /// Renders one frame, hands it to `presenter` and returns its timing.
    pub fn run_frame<P: FramePresenterPort>(
        &mut self,
        presenter: &mut P,
    ) -> Result<FrameStats, P::Failure> {
        let start = Instant::now();
        self.render();
        let stats = self.clock.record(start, start.elapsed());

        presenter.present(&self.frame, &stats)?;

        Ok(stats)
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn colour_map(&self) -> &CMap {
        &self.colour_map
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.clock.frames()
    }
}
