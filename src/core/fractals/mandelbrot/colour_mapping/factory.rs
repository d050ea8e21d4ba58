use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::{
    grayscale::GrayscaleColourMap,
    kinds::ColourPolicyKind,
    palette::{ColourTable, PaletteColourMap},
};

/// The colour policy chosen at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourPolicy {
    Palette(PaletteColourMap),
    Grayscale(GrayscaleColourMap),
}

impl ColourPolicy {
    #[must_use]
    pub fn kind(&self) -> ColourPolicyKind {
        match self {
            Self::Palette(_) => ColourPolicyKind::Palette,
            Self::Grayscale(_) => ColourPolicyKind::Grayscale,
        }
    }
}

impl ColourMap for ColourPolicy {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        match self {
            Self::Palette(map) => map.map(iterations),
            Self::Grayscale(map) => map.map(iterations),
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Palette(map) => map.display_name(),
            Self::Grayscale(map) => map.display_name(),
        }
    }
}

/// Uses the palette when one was loaded, otherwise the grayscale fallback.
#[must_use]
pub fn colour_policy_factory(table: Option<ColourTable>, max_iterations: u32) -> ColourPolicy {
    match table {
        Some(table) => ColourPolicy::Palette(PaletteColourMap::new(table, max_iterations)),
        None => ColourPolicy::Grayscale(GrayscaleColourMap::new(max_iterations)),
    }
}
