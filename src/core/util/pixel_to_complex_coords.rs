use crate::core::data::transform::Transform;

/// Per-frame pixel to complex-plane mapping.
///
/// Pixel `(x, y)` maps to
/// `(center_x - extent_w / 2 + x * extent_w / width,
///   center_y - extent_h / 2 + y * extent_h / height)`,
/// so column 0 / row 0 sit exactly on the left / top edge of the view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    left: f32,
    top: f32,
    step_x: f32,
    step_y: f32,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(transform: &Transform, width: u32, height: u32) -> Self {
        Self {
            left: transform.center_x() - 0.5 * transform.extent_w(),
            top: transform.center_y() - 0.5 * transform.extent_h(),
            step_x: transform.extent_w() / width as f32,
            step_y: transform.extent_h() / height as f32,
        }
    }

    #[inline]
    #[must_use]
    pub fn real(&self, x: u32) -> f32 {
        self.left + x as f32 * self.step_x
    }

    #[inline]
    #[must_use]
    pub fn imag(&self, y: u32) -> f32 {
        self.top + y as f32 * self.step_y
    }

    /// Real parts of `L` consecutive columns starting at `x`.
    #[inline]
    #[must_use]
    pub fn reals<const L: usize>(&self, x: u32) -> [f32; L] {
        std::array::from_fn(|lane| self.real(x + lane as u32))
    }
}
