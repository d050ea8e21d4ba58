use winit::keyboard::{Key, NamedKey};

use crate::core::navigation::NavigationAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(NavigationAction),
    Quit,
}

/// Maps a pressed logical key to what the viewer should do with it.
///
/// Letters are matched case-insensitively so that Shift or Caps Lock does not
/// change the binding.
#[must_use]
pub fn action_for_key(key: Key<&str>) -> Option<KeyAction> {
    let action = match key {
        Key::Named(NamedKey::Escape) => return Some(KeyAction::Quit),
        Key::Named(NamedKey::ArrowUp) => NavigationAction::PanUp,
        Key::Named(NamedKey::ArrowDown) => NavigationAction::PanDown,
        Key::Named(NamedKey::ArrowLeft) => NavigationAction::PanLeft,
        Key::Named(NamedKey::ArrowRight) => NavigationAction::PanRight,
        Key::Named(NamedKey::PageUp) => NavigationAction::ZoomIn,
        Key::Named(NamedKey::PageDown) => NavigationAction::ZoomOut,
        Key::Named(NamedKey::Home) => NavigationAction::Reset,
        Key::Character(text) => match text.to_ascii_lowercase().as_str() {
            "w" => NavigationAction::PanUp,
            "s" => NavigationAction::PanDown,
            "a" => NavigationAction::PanLeft,
            "d" => NavigationAction::PanRight,
            "+" | "=" | "e" => NavigationAction::ZoomIn,
            "-" | "_" | "q" => NavigationAction::ZoomOut,
            "r" => NavigationAction::Reset,
            _ => return None,
        },
        _ => return None,
    };

    Some(KeyAction::Navigate(action))
}
