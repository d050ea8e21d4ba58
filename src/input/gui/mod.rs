//! Windowed viewer: winit event loop, key bindings and a pixels surface.

pub mod commands;
pub mod key_bindings;
