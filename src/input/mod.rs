//! Front ends that turn user input into navigation commands and drive the
//! frame loop.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
