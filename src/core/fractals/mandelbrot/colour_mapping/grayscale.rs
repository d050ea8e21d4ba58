use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourPolicyKind;

/// Fallback used when no palette is configured: the grey level is the number
/// of iterations left before the bound, saturated to 255.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrayscaleColourMap {
    max_iterations: u32,
}

impl GrayscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for GrayscaleColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        let remaining = self.max_iterations.saturating_sub(iterations);
        Colour::grey(remaining.min(u32::from(u8::MAX)) as u8)
    }

    fn display_name(&self) -> &str {
        ColourPolicyKind::Grayscale.display_name()
    }
}
