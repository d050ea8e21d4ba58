use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::controllers::interactive::{FramePresenterPort, FrameStats};
use crate::core::data::frame_buffer::FrameBuffer;

/// Presents frames through a `pixels` surface scaled onto the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    /// Creates a `width` x `height` framebuffer; it must match the size of
    /// the frames that will be presented.
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self { pixels })
    }

    /// Follows the window size; the framebuffer keeps its dimensions.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Failure = pixels::Error;

    fn present(&mut self, frame: &FrameBuffer, _stats: &FrameStats) -> Result<(), pixels::Error> {
        let src = frame.as_bytes();
        let dest = self.pixels.frame_mut();

        debug_assert_eq!(
            dest.len(),
            src.len(),
            "pixels frame length {} does not match {}x{} frame buffer",
            dest.len(),
            frame.width(),
            frame.height()
        );

        dest.copy_from_slice(src);
        self.pixels.render()
    }
}
