use log::info;

use crate::controllers::startup::{StartupError, build_controller};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::NavigationAction;
use crate::presenters::log::presenter::LogPresenter;

/// Outcome of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub frames_rendered: u64,
    pub final_checksum: Option<u64>,
}

/// Renders `frames` frames through a [`LogPresenter`]. Before frame `i` the
/// `i`-th scripted action, if any, is applied.
pub struct RunHeadlessCommand {
    config: MandelbrotConfig,
    frames: u64,
    script: Vec<NavigationAction>,
}

impl RunHeadlessCommand {
    pub fn new(config: MandelbrotConfig, frames: u64, script: Vec<NavigationAction>) -> Self {
        Self {
            config,
            frames,
            script,
        }
    }

    pub fn execute(&self) -> Result<HeadlessSummary, StartupError> {
        let mut controller = build_controller(&self.config)?;
        let mut presenter = LogPresenter::default();

        info!(
            "Rendering {} frames at {}x{}, max iterations {}, colouring {}",
            self.frames,
            self.config.width,
            self.config.height,
            self.config.max_iterations,
            controller.colour_map().kind()
        );

        let mut script = self.script.iter();
        for _ in 0..self.frames {
            if let Some(action) = script.next() {
                controller.handle(action.command(&self.config));
            }

            match controller.run_frame(&mut presenter) {
                Ok(_) => {}
                Err(never) => match never {},
            }
        }

        let summary = HeadlessSummary {
            frames_rendered: controller.frames_rendered(),
            final_checksum: presenter.last_checksum(),
        };

        if let Some(checksum) = summary.final_checksum {
            info!(
                "Finished {} frames, final view {:?}, checksum {:016x}",
                summary.frames_rendered,
                controller.transform(),
                checksum
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            width: 40,
            height: 30,
            max_iterations: 64,
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn test_renders_requested_frame_count() {
        let summary = RunHeadlessCommand::new(small_config(), 4, Vec::new())
            .execute()
            .unwrap();

        assert_eq!(summary.frames_rendered, 4);
        assert!(summary.final_checksum.is_some());
    }

    #[test]
    fn test_zero_frames_renders_nothing() {
        let summary = RunHeadlessCommand::new(small_config(), 0, Vec::new())
            .execute()
            .unwrap();

        assert_eq!(
            summary,
            HeadlessSummary {
                frames_rendered: 0,
                final_checksum: None
            }
        );
    }

    #[test]
    fn test_script_changes_final_frame() {
        let still = RunHeadlessCommand::new(small_config(), 2, Vec::new())
            .execute()
            .unwrap();
        let zoomed = RunHeadlessCommand::new(small_config(), 2, vec![NavigationAction::ZoomIn])
            .execute()
            .unwrap();

        assert_ne!(still.final_checksum, zoomed.final_checksum);
    }

    #[test]
    fn test_reset_in_script_restores_initial_frame() {
        let still = RunHeadlessCommand::new(small_config(), 3, Vec::new())
            .execute()
            .unwrap();
        let script = vec![
            NavigationAction::PanLeft,
            NavigationAction::ZoomIn,
            NavigationAction::Reset,
        ];
        let reset = RunHeadlessCommand::new(small_config(), 3, script)
            .execute()
            .unwrap();

        assert_eq!(still.final_checksum, reset.final_checksum);
    }

    #[test]
    fn test_missing_palette_fails_before_rendering() {
        let config = MandelbrotConfig {
            palette_path: Some(PathBuf::from("/nonexistent/palette.txt")),
            ..small_config()
        };

        let result = RunHeadlessCommand::new(config, 1, Vec::new()).execute();

        assert!(matches!(result, Err(StartupError::Palette { .. })));
    }
}
