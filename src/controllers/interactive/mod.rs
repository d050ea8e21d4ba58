//! Interactive controller for frame-by-frame fractal rendering.
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `NavigationCommand`s applied between frames
//! - **Output**: `FramePresenterPort` for receiving rendered frames
//! - **Core**: Uses domain actions from `core/` for actual computation

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_stats::{FrameClock, FrameStats};
pub use ports::presenter::FramePresenterPort;
