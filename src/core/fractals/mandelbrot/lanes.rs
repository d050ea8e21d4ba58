//! Lane-batched escape-time evaluation.
//!
//! A batch holds `L` starting points from one scanline and advances them in
//! lockstep. Every lane carries its own `active` flag; the update of a lane's
//! state and counter is masked by that flag, so a lane that has escaped keeps
//! its count and its (possibly large) values never feed back into the loop.
//! The arithmetic per lane is exactly the arithmetic of [`iterate`], in the
//! same order, so both forms agree bit for bit.
//!
//! [`iterate`]: crate::core::fractals::mandelbrot::algorithm::iterate

/// Lane width used by the frame renderer.
pub const DEFAULT_LANES: usize = 8;

#[derive(Debug, Clone, Copy)]
struct LaneBatch<const L: usize> {
    x0: [f32; L],
    y0: f32,
    x: [f32; L],
    y: [f32; L],
    counts: [u32; L],
    active: [bool; L],
}

impl<const L: usize> LaneBatch<L> {
    fn new(x0: [f32; L], y0: f32) -> Self {
        Self {
            x0,
            y0,
            x: x0,
            y: [y0; L],
            counts: [0; L],
            active: [true; L],
        }
    }

    /// Runs one masked iteration and reports whether any lane is still active.
    #[inline(always)]
    fn step(&mut self, escape_radius_sq: f32) -> bool {
        for lane in 0..L {
            let x = self.x[lane];
            let y = self.y[lane];
            let x2 = x * x;
            let y2 = y * y;
            let xy = x * y;

            let active = self.active[lane] && !(x2 + y2 > escape_radius_sq);
            self.active[lane] = active;

            if active {
                self.counts[lane] += 1;
                self.x[lane] = x2 - y2 + self.x0[lane];
                self.y[lane] = 2.0 * xy + self.y0;
            }
        }

        self.active.iter().any(|&active| active)
    }
}

/// Evaluates `L` points sharing the imaginary part `y0`.
///
/// Lane `i` of the result equals `iterate(x0s[i], y0, max_iterations, escape_radius)`.
#[must_use]
pub fn iterate_batch<const L: usize>(
    x0s: [f32; L],
    y0: f32,
    max_iterations: u32,
    escape_radius: f32,
) -> [u32; L] {
    let escape_radius_sq = escape_radius * escape_radius;
    let mut batch = LaneBatch::new(x0s, y0);

    for _ in 0..max_iterations {
        if !batch.step(escape_radius_sq) {
            break;
        }
    }

    batch.counts
}
