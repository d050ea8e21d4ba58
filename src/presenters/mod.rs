pub mod log;
#[cfg(feature = "gui")]
pub mod pixels;
