use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourPolicyKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteFormatIssue {
    #[error("palette size must be greater than zero")]
    EmptyPalette,
    #[error("only {found} of {expected} entries present")]
    TooFewEntries { found: usize, expected: usize },
    #[error("entry has {channels} of 3 channel values")]
    TruncatedEntry { channels: usize },
    #[error("`{token}` is not an integer in 0..=255")]
    InvalidChannel { token: String },
    #[error("content is not valid UTF-8 text")]
    NotText,
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette file {} could not be opened: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid palette at entry {index}: {issue}")]
    InvalidFormat {
        index: usize,
        #[source]
        issue: PaletteFormatIssue,
    },
}

/// A fixed-size, immutable palette of RGB entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    entries: Vec<Colour>,
}

fn parse_channel(token: &str) -> Result<u8, PaletteFormatIssue> {
    token
        .parse::<u8>()
        .map_err(|_| PaletteFormatIssue::InvalidChannel {
            token: token.to_owned(),
        })
}

impl ColourTable {
    /// Parses exactly `size` whitespace-separated `R G B` records.
    ///
    /// Anything after the last record is ignored. A missing or malformed
    /// value anywhere in the first `size` records rejects the whole table.
    pub fn parse(source: &str, size: usize) -> Result<Self, PaletteError> {
        if size == 0 {
            return Err(PaletteError::InvalidFormat {
                index: 0,
                issue: PaletteFormatIssue::EmptyPalette,
            });
        }

        let mut tokens = source.split_ascii_whitespace();
        let mut entries = Vec::with_capacity(size);

        for index in 0..size {
            let mut channels = [0u8; 3];

            for (read, channel) in channels.iter_mut().enumerate() {
                let Some(token) = tokens.next() else {
                    let issue = if read == 0 {
                        PaletteFormatIssue::TooFewEntries {
                            found: index,
                            expected: size,
                        }
                    } else {
                        PaletteFormatIssue::TruncatedEntry { channels: read }
                    };
                    return Err(PaletteError::InvalidFormat { index, issue });
                };

                *channel = parse_channel(token)
                    .map_err(|issue| PaletteError::InvalidFormat { index, issue })?;
            }

            let [r, g, b] = channels;
            entries.push(Colour { r, g, b });
        }

        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<Colour>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::InvalidFormat {
                index: 0,
                issue: PaletteFormatIssue::EmptyPalette,
            });
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Entry `index mod len`, so every index is in range.
    #[inline]
    #[must_use]
    pub fn wrapping_get(&self, index: usize) -> Colour {
        self.entries[index % self.entries.len()]
    }
}

/// Writes the table back out in its on-disk form, one `R G B` record per line.
impl fmt::Display for ColourTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for Colour { r, g, b } in &self.entries {
            writeln!(f, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }
}

/// Colours escaped points by cycling through a [`ColourTable`]; points that
/// never escaped, or escaped before the first iteration, are black.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColourMap {
    table: ColourTable,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(table: ColourTable, max_iterations: u32) -> Self {
        Self {
            table,
            max_iterations,
        }
    }

    #[must_use]
    pub fn table(&self) -> &ColourTable {
        &self.table
    }
}

impl ColourMap for PaletteColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        if iterations == 0 || iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        self.table.wrapping_get(iterations as usize)
    }

    fn display_name(&self) -> &str {
        ColourPolicyKind::Palette.display_name()
    }
}
