use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("viewport extent must be positive and finite: {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
    #[error("viewport center must be finite: ({x}, {y})")]
    InvalidCenter { x: f32, y: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The rectangle of the complex plane currently mapped onto the frame buffer,
/// stored as a center point and a width/height extent.
///
/// Row 0 of the frame buffer maps to the smallest imaginary coordinate, so
/// panning "up" moves the center towards smaller `y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    center_x: f32,
    center_y: f32,
    extent_w: f32,
    extent_h: f32,
}

impl Transform {
    pub fn new(
        center_x: f32,
        center_y: f32,
        extent_w: f32,
        extent_h: f32,
    ) -> Result<Self, TransformError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(TransformError::InvalidCenter {
                x: center_x,
                y: center_y,
            });
        }

        if !(extent_w > 0.0 && extent_h > 0.0) || !extent_w.is_finite() || !extent_h.is_finite() {
            return Err(TransformError::InvalidExtent {
                width: extent_w,
                height: extent_h,
            });
        }

        Ok(Self {
            center_x,
            center_y,
            extent_w,
            extent_h,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    #[must_use]
    pub fn extent_w(&self) -> f32 {
        self.extent_w
    }

    #[must_use]
    pub fn extent_h(&self) -> f32 {
        self.extent_h
    }

    /// Shifts the center by `factor` of the current extent along one axis.
    pub fn pan(&mut self, direction: PanDirection, factor: f32) {
        match direction {
            PanDirection::Left => self.center_x -= factor * self.extent_w,
            PanDirection::Right => self.center_x += factor * self.extent_w,
            PanDirection::Up => self.center_y -= factor * self.extent_h,
            PanDirection::Down => self.center_y += factor * self.extent_h,
        }
    }

    /// Scales both extents by `factor` (in) or `1 / factor` (out).
    /// `factor` is expected to lie in `(0, 1)`.
    pub fn zoom(&mut self, direction: ZoomDirection, factor: f32) {
        match direction {
            ZoomDirection::In => {
                self.extent_w *= factor;
                self.extent_h *= factor;
            }
            ZoomDirection::Out => {
                self.extent_w /= factor;
                self.extent_h /= factor;
            }
        }
    }
}
