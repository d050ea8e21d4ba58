use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::transform::{Transform, TransformError};
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const DEFAULT_WIDTH: u32 = 1080;
const DEFAULT_HEIGHT: u32 = 1080;
const DEFAULT_CENTER_X: f32 = -0.75;
const DEFAULT_CENTER_Y: f32 = 0.0;
const DEFAULT_EXTENT: f32 = 3.5;
const DEFAULT_MAX_ITERATIONS: u32 = 255;
const DEFAULT_PALETTE_SIZE: usize = 16;
const DEFAULT_PAN_FACTOR: f32 = 0.05;
const DEFAULT_ZOOM_FACTOR: f32 = 0.5;

/// When no escape radius is configured it scales with the viewport width.
pub const ESCAPE_RADIUS_PER_PIXEL: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
    #[error("palette size must be greater than zero")]
    ZeroPaletteSize,
    #[error("pan factor must be positive and finite: {0}")]
    InvalidPanFactor(f32),
    #[error("zoom factor must lie strictly between 0 and 1: {0}")]
    InvalidZoomFactor(f32),
    #[error("initial view is invalid: {0}")]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
}

/// Startup settings. Read once, never mutated while the viewer runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub center_x: f32,
    pub center_y: f32,
    pub extent_w: f32,
    pub extent_h: f32,
    pub max_iterations: u32,
    pub escape_radius: Option<f32>,
    pub palette_size: usize,
    pub palette_path: Option<PathBuf>,
    pub pan_factor: f32,
    pub zoom_factor: f32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            extent_w: DEFAULT_EXTENT,
            extent_h: DEFAULT_EXTENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: None,
            palette_size: DEFAULT_PALETTE_SIZE,
            palette_path: None,
            pan_factor: DEFAULT_PAN_FACTOR,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn escape_radius(&self) -> f32 {
        self.escape_radius
            .unwrap_or(ESCAPE_RADIUS_PER_PIXEL * self.width as f32)
    }

    pub fn initial_transform(&self) -> Result<Transform, TransformError> {
        Transform::new(self.center_x, self.center_y, self.extent_w, self.extent_h)
    }

    pub fn algorithm(&self) -> Result<EscapeTimeAlgorithm, MandelbrotError> {
        EscapeTimeAlgorithm::new(self.max_iterations, self.escape_radius())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        if self.palette_size == 0 {
            return Err(ConfigError::ZeroPaletteSize);
        }

        if !(self.pan_factor > 0.0) || !self.pan_factor.is_finite() {
            return Err(ConfigError::InvalidPanFactor(self.pan_factor));
        }

        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(ConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        self.initial_transform()?;
        self.algorithm()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MandelbrotConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_escape_radius_scales_with_width() {
        let config = MandelbrotConfig {
            width: 800,
            ..MandelbrotConfig::default()
        };

        assert_eq!(MandelbrotConfig::default().escape_radius(), 4320.0);
        assert_eq!(config.escape_radius(), 3200.0);
    }

    #[test]
    fn explicit_escape_radius_wins() {
        let config = MandelbrotConfig {
            escape_radius: Some(2.0),
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.escape_radius(), 2.0);
        assert_eq!(config.algorithm().unwrap().escape_radius(), 2.0);
    }

    #[test]
    fn initial_transform_uses_configured_view() {
        let transform = MandelbrotConfig::default().initial_transform().unwrap();

        assert_eq!(transform.center_x(), -0.75);
        assert_eq!(transform.center_y(), 0.0);
        assert_eq!(transform.extent_w(), 3.5);
        assert_eq!(transform.extent_h(), 3.5);
    }

    #[test]
    fn validate_rejects_empty_viewport() {
        let config = MandelbrotConfig {
            height: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidViewport {
                width: 1080,
                height: 0
            })
        );
    }

    #[test]
    fn validate_rejects_zero_palette_size() {
        let config = MandelbrotConfig {
            palette_size: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroPaletteSize));
    }

    #[test]
    fn validate_rejects_zoom_factor_outside_unit_interval() {
        for zoom_factor in [0.0, 1.0, 1.5, -0.5, f32::NAN] {
            let config = MandelbrotConfig {
                zoom_factor,
                ..MandelbrotConfig::default()
            };

            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidZoomFactor(_))
            ));
        }
    }

    #[test]
    fn validate_rejects_bad_pan_factor() {
        for pan_factor in [0.0, -0.1, f32::INFINITY] {
            let config = MandelbrotConfig {
                pan_factor,
                ..MandelbrotConfig::default()
            };

            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidPanFactor(_))
            ));
        }
    }

    #[test]
    fn validate_rejects_zero_max_iterations() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Algorithm(MandelbrotError::ZeroMaxIterationsError))
        );
    }

    #[test]
    fn validate_rejects_overflowing_escape_radius() {
        let config = MandelbrotConfig {
            escape_radius: Some(1e20),
            max_iterations: 50,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Algorithm(MandelbrotError::InvalidEscapeRadius(1e20)))
        );
    }

    #[test]
    fn validate_rejects_non_positive_extent() {
        let config = MandelbrotConfig {
            extent_w: 0.0,
            ..MandelbrotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Transform(TransformError::InvalidExtent { .. }))
        ));
    }

    #[test]
    fn config_deserializes_partial_toml() {
        let config: MandelbrotConfig = toml::from_str(
            r#"
            width = 640
            height = 480
            max_iterations = 500
            palette_path = "assets/palette.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.palette_path, Some(PathBuf::from("assets/palette.txt")));
        assert_eq!(config.zoom_factor, 0.5);
        assert_eq!(config.escape_radius(), 2560.0);
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let result: Result<MandelbrotConfig, _> = toml::from_str("colour = \"red\"");

        assert!(result.is_err());
    }
}
