use std::path::PathBuf;

use clap::{Args, Parser};

use crate::controllers::startup::StartupError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::NavigationAction;
use crate::storage::read_config::parse_config;

/// Options shared by every front end: where the configuration comes from and
/// which of its values are overridden.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewerArgs {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Palette file of whitespace-separated `R G B` records
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub max_iterations: Option<u32>,
}

impl ViewerArgs {
    /// Reads the configuration file if given, then applies command-line
    /// overrides. The result is validated.
    pub fn load_config(&self) -> Result<MandelbrotConfig, StartupError> {
        let mut config = match &self.config {
            Some(path) => parse_config(path)?,
            None => MandelbrotConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(palette) = &self.palette {
            config.palette_path = Some(palette.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Renders a fixed number of frames without a window, logging timing and a
/// checksum of the final frame.
#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer", version)]
pub struct HeadlessArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,

    /// Number of frames to render
    #[arg(long, default_value_t = 60)]
    pub frames: u64,

    /// Navigation applied before frame N, in order (pan-up, pan-down,
    /// pan-left, pan-right, zoom-in, zoom-out, reset)
    #[arg(long = "command", value_name = "ACTION")]
    pub commands: Vec<NavigationAction>,
}

/// Opens a window and explores the set interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "gui", version)]
pub struct GuiArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::mandelbrot_config::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_headless_defaults() {
        let args = HeadlessArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(args.frames, 60);
        assert!(args.commands.is_empty());
        assert_eq!(
            args.viewer.load_config().unwrap(),
            MandelbrotConfig::default()
        );
    }

    #[test]
    fn test_commands_are_parsed_in_order() {
        let args = HeadlessArgs::try_parse_from([
            "mandelbrot_explorer",
            "--command",
            "zoom-in",
            "--command",
            "PAN-LEFT",
            "--command",
            "reset",
            "--frames",
            "3",
        ])
        .unwrap();

        assert_eq!(
            args.commands,
            vec![
                NavigationAction::ZoomIn,
                NavigationAction::PanLeft,
                NavigationAction::Reset
            ]
        );
        assert_eq!(args.frames, 3);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let result = HeadlessArgs::try_parse_from(["mandelbrot_explorer", "--command", "spin"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "width = 320\nheight = 200\nmax_iterations = 100\n").unwrap();

        let args = GuiArgs::try_parse_from([
            "gui",
            "--config",
            file.path().to_str().unwrap(),
            "--height",
            "240",
            "--palette",
            "colours.txt",
        ])
        .unwrap();
        let config = args.viewer.load_config().unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.palette_path, Some(PathBuf::from("colours.txt")));
    }

    #[test]
    fn test_flag_overrides_invalid_file_value() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "width = 0\nheight = 200\n").unwrap();

        let args = ViewerArgs {
            config: Some(file.path().to_path_buf()),
            width: Some(320),
            ..ViewerArgs::default()
        };
        let config = args.load_config().unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
    }

    #[test]
    fn test_invalid_file_value_without_override_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "width = 0\n").unwrap();

        let args = ViewerArgs {
            config: Some(file.path().to_path_buf()),
            ..ViewerArgs::default()
        };

        assert!(matches!(
            args.load_config(),
            Err(StartupError::Config(ConfigError::InvalidViewport { width: 0, .. }))
        ));
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let args = ViewerArgs {
            max_iterations: Some(0),
            ..ViewerArgs::default()
        };

        assert!(matches!(
            args.load_config(),
            Err(StartupError::Config(ConfigError::Algorithm(_)))
        ));
    }
}
