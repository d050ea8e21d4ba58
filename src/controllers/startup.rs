use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_policy_factory;
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::storage::read_colour_table::read_colour_table;
use crate::storage::read_config::ReadConfigError;

/// Everything that stops the viewer before the first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    ReadConfig(#[from] ReadConfigError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not load palette {}: {source}", .path.display())]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },
    #[error("could not create frame buffer: {0}")]
    FrameBuffer(#[from] FrameBufferError),
}

/// Validates `config`, loads the palette if one is configured and allocates
/// the frame buffer.
pub fn build_controller(config: &MandelbrotConfig) -> Result<InteractiveController, StartupError> {
    config.validate()?;

    let table = match &config.palette_path {
        Some(path) => {
            let table = read_colour_table(path, config.palette_size).map_err(|source| {
                StartupError::Palette {
                    path: path.clone(),
                    source,
                }
            })?;
            info!("Loaded {} palette entries from {}", table.len(), path.display());
            Some(table)
        }
        None => {
            info!("No palette configured, using grayscale colouring");
            None
        }
    };

    let algorithm = config.algorithm().map_err(ConfigError::from)?;
    let home = config.initial_transform().map_err(ConfigError::from)?;
    let colour_map = colour_policy_factory(table, config.max_iterations);
    let frame = FrameBuffer::new(config.width, config.height)?;

    Ok(InteractiveController::new(algorithm, colour_map, home, frame))
}
