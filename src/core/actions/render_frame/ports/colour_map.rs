use crate::core::data::colour::Colour;

/// Maps an escape-time count to the colour written for that pixel.
///
/// Implementations are total: every count in `[0, max_iterations]` and beyond
/// has a colour, so a frame never fails half way through.
pub trait ColourMap {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
