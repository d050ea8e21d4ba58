mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::interactive::{
    FrameClock, FramePresenterPort, FrameStats, InteractiveController,
};
pub use controllers::startup::{StartupError, build_controller};
pub use core::actions::render_frame::ports::colour_map::ColourMap;
pub use core::actions::render_frame::render_frame::{render_frame, render_frame_lanes};
pub use core::data::colour::Colour;
pub use core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer, FrameBufferError};
pub use core::data::transform::{PanDirection, Transform, TransformError, ZoomDirection};
pub use core::fractals::mandelbrot::algorithm::{EscapeTimeAlgorithm, iterate};
pub use core::fractals::mandelbrot::colour_mapping::factory::{
    ColourPolicy, colour_policy_factory,
};
pub use core::fractals::mandelbrot::colour_mapping::grayscale::GrayscaleColourMap;
pub use core::fractals::mandelbrot::colour_mapping::kinds::ColourPolicyKind;
pub use core::fractals::mandelbrot::colour_mapping::palette::{
    ColourTable, PaletteColourMap, PaletteError, PaletteFormatIssue,
};
pub use core::fractals::mandelbrot::errors::MandelbrotError;
pub use core::fractals::mandelbrot::lanes::{DEFAULT_LANES, iterate_batch};
pub use core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
pub use core::navigation::{NavigationAction, NavigationCommand, UnknownNavigationAction};
pub use core::util::pixel_to_complex_coords::PlaneMapping;
pub use input::cli::args::{GuiArgs, HeadlessArgs, ViewerArgs};
pub use input::cli::commands::run_headless::{HeadlessSummary, RunHeadlessCommand};
pub use presenters::log::presenter::{LogPresenter, frame_checksum};
pub use storage::read_colour_table::read_colour_table;
pub use storage::read_config::{ReadConfigError, parse_config, read_config};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use input::gui::key_bindings::{KeyAction, action_for_key};
#[cfg(feature = "gui")]
pub use presenters::pixels::presenter::PixelsPresenter;
