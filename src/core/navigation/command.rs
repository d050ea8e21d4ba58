use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::transform::{PanDirection, Transform, ZoomDirection};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// A discrete change to the view, applied strictly between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationCommand {
    Pan(PanDirection, f32),
    Zoom(ZoomDirection, f32),
    /// Returns to the configured initial view.
    Reset,
}

impl NavigationCommand {
    pub fn apply(self, transform: &mut Transform, home: &Transform) {
        match self {
            Self::Pan(direction, factor) => transform.pan(direction, factor),
            Self::Zoom(direction, factor) => transform.zoom(direction, factor),
            Self::Reset => *transform = *home,
        }
    }
}

/// User-facing navigation actions, independent of the configured factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNavigationAction(pub String);

impl fmt::Display for UnknownNavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown navigation action `{}` (expected one of: {})",
            self.0,
            NavigationAction::NAMES.join(", ")
        )
    }
}

impl Error for UnknownNavigationAction {}

impl NavigationAction {
    pub const ALL: &'static [Self] = &[
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Reset,
    ];

    const NAMES: &'static [&'static str] = &[
        "pan-up", "pan-down", "pan-left", "pan-right", "zoom-in", "zoom-out", "reset",
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanUp => "pan-up",
            Self::PanDown => "pan-down",
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::Reset => "reset",
        }
    }

    /// Resolves the action with the configured pan and zoom factors.
    #[must_use]
    pub fn command(self, config: &MandelbrotConfig) -> NavigationCommand {
        match self {
            Self::PanUp => NavigationCommand::Pan(PanDirection::Up, config.pan_factor),
            Self::PanDown => NavigationCommand::Pan(PanDirection::Down, config.pan_factor),
            Self::PanLeft => NavigationCommand::Pan(PanDirection::Left, config.pan_factor),
            Self::PanRight => NavigationCommand::Pan(PanDirection::Right, config.pan_factor),
            Self::ZoomIn => NavigationCommand::Zoom(ZoomDirection::In, config.zoom_factor),
            Self::ZoomOut => NavigationCommand::Zoom(ZoomDirection::Out, config.zoom_factor),
            Self::Reset => NavigationCommand::Reset,
        }
    }
}

impl fmt::Display for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavigationAction {
    type Err = UnknownNavigationAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNavigationAction(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Transform {
        Transform::new(-0.75, 0.0, 3.5, 3.5).unwrap()
    }

    #[test]
    fn names_match_all_actions() {
        let names: Vec<&str> = NavigationAction::ALL.iter().map(|a| a.name()).collect();

        assert_eq!(names, NavigationAction::NAMES);
    }

    #[test]
    fn from_str_round_trips_every_name() {
        for &action in NavigationAction::ALL {
            assert_eq!(action.to_string().parse::<NavigationAction>(), Ok(action));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Zoom-In".parse::<NavigationAction>(), Ok(NavigationAction::ZoomIn));
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "spin".parse::<NavigationAction>().unwrap_err();

        assert_eq!(err, UnknownNavigationAction("spin".to_string()));
        assert!(err.to_string().contains("pan-left"));
    }

    #[test]
    fn command_uses_configured_factors() {
        let config = MandelbrotConfig {
            pan_factor: 0.1,
            zoom_factor: 0.25,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            NavigationAction::PanLeft.command(&config),
            NavigationCommand::Pan(PanDirection::Left, 0.1)
        );
        assert_eq!(
            NavigationAction::ZoomOut.command(&config),
            NavigationCommand::Zoom(ZoomDirection::Out, 0.25)
        );
        assert_eq!(NavigationAction::Reset.command(&config), NavigationCommand::Reset);
    }

    #[test]
    fn apply_pan_and_zoom_mutate_transform() {
        let home = home();
        let mut transform = home;

        NavigationCommand::Pan(PanDirection::Right, 0.5).apply(&mut transform, &home);
        NavigationCommand::Zoom(ZoomDirection::In, 0.5).apply(&mut transform, &home);

        assert_eq!(transform.center_x(), 1.0);
        assert_eq!(transform.extent_w(), 1.75);
    }

    #[test]
    fn apply_reset_restores_home() {
        let home = home();
        let mut transform = home;

        NavigationCommand::Pan(PanDirection::Down, 1.0).apply(&mut transform, &home);
        NavigationCommand::Zoom(ZoomDirection::In, 0.1).apply(&mut transform, &home);
        NavigationCommand::Reset.apply(&mut transform, &home);

        assert_eq!(transform, home);
    }
}
