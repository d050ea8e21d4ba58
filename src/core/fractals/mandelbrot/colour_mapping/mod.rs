pub mod factory;
pub mod grayscale;
pub mod kinds;
pub mod palette;
