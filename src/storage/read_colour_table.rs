use std::path::Path;

use crate::core::fractals::mandelbrot::colour_mapping::palette::{
    ColourTable, PaletteError, PaletteFormatIssue,
};

/// Reads and parses a palette file holding `size` `R G B` records.
///
/// Any failure to open or read the file is reported as `FileNotFound`.
pub fn read_colour_table(
    filepath: impl AsRef<Path>,
    size: usize,
) -> Result<ColourTable, PaletteError> {
    let filepath = filepath.as_ref();
    let bytes = std::fs::read(filepath).map_err(|source| PaletteError::FileNotFound {
        path: filepath.to_path_buf(),
        source,
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|_| PaletteError::InvalidFormat {
        index: 0,
        issue: PaletteFormatIssue::NotText,
    })?;

    ColourTable::parse(text, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_palette(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_entries(count: u8) -> Vec<Colour> {
        (0..count)
            .map(|i| Colour {
                r: i,
                g: i.wrapping_mul(7),
                b: 255 - i,
            })
            .collect()
    }

    #[test]
    fn test_palette_round_trip() {
        let table = ColourTable::from_entries(sample_entries(16)).unwrap();
        let file = write_palette(table.to_string().as_bytes());

        let loaded = read_colour_table(file.path(), 16).unwrap();

        assert_eq!(loaded.entries(), sample_entries(16).as_slice());
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("palette.txt");

        let result = read_colour_table(&missing, 16);

        match result {
            Err(PaletteError::FileNotFound { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_one_record_short_is_invalid_format() {
        let table = ColourTable::from_entries(sample_entries(15)).unwrap();
        let file = write_palette(table.to_string().as_bytes());

        let result = read_colour_table(file.path(), 16);

        assert!(matches!(
            result,
            Err(PaletteError::InvalidFormat {
                issue: PaletteFormatIssue::TooFewEntries {
                    found: 15,
                    expected: 16
                },
                ..
            })
        ));
    }

    #[test]
    fn test_binary_content_is_invalid_format() {
        let file = write_palette(&[0xFF, 0xFE, 0x00, 0x31]);

        let result = read_colour_table(file.path(), 1);

        assert!(matches!(
            result,
            Err(PaletteError::InvalidFormat {
                issue: PaletteFormatIssue::NotText,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_entry_fails_whole_load() {
        let file = write_palette(b"1 2 3\n4 5 six\n7 8 9\n");

        assert!(matches!(
            read_colour_table(file.path(), 3),
            Err(PaletteError::InvalidFormat { index: 1, .. })
        ));
    }
}
