use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::lanes::iterate_batch;

/// Classic escape-time test for the point `c = x0 + i*y0`, starting from `z = c`.
///
/// Returns the number of completed iterations before `|z|` exceeded
/// `escape_radius`, or `max_iterations` if it never did.
#[must_use]
pub fn iterate(x0: f32, y0: f32, max_iterations: u32, escape_radius: f32) -> u32 {
    let escape_radius_sq = escape_radius * escape_radius;
    let mut x = x0;
    let mut y = y0;

    for iteration in 0..max_iterations {
        let x2 = x * x;
        let y2 = y * y;
        let xy = x * y;

        if x2 + y2 > escape_radius_sq {
            return iteration;
        }

        x = x2 - y2 + x0;
        y = 2.0 * xy + y0;
    }

    max_iterations
}

/// Escape-time settings shared by every pixel of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    max_iterations: u32,
    escape_radius: f32,
}

impl EscapeTimeAlgorithm {
    pub fn new(max_iterations: u32, escape_radius: f32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        // the squared radius is what `iterate` compares against
        if !(escape_radius > 0.0) || !(escape_radius * escape_radius).is_finite() {
            return Err(MandelbrotError::InvalidEscapeRadius(escape_radius));
        }

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f32 {
        self.escape_radius
    }

    #[inline]
    #[must_use]
    pub fn escape_time(&self, x0: f32, y0: f32) -> u32 {
        iterate(x0, y0, self.max_iterations, self.escape_radius)
    }

    #[inline]
    #[must_use]
    pub fn escape_time_batch<const L: usize>(&self, x0s: [f32; L], y0: f32) -> [u32; L] {
        iterate_batch(x0s, y0, self.max_iterations, self.escape_radius)
    }
}
