//! Command-line front end: argument parsing and the headless frame driver.

pub mod args;
pub mod commands;
