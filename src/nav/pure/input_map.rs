// Raw input to NavKind mapping

use crate::input::PadButton;
use crate::nav::types::NavKind;

/// Map a platform bridge action string ("UP", "confirm", ...) to a NavKind
pub fn map_action_str(action: &str) -> Option<NavKind> {
    match action.trim().to_ascii_uppercase().as_str() {
        "UP" => Some(NavKind::Up),
        "DOWN" => Some(NavKind::Down),
        "LEFT" => Some(NavKind::Left),
        "RIGHT" => Some(NavKind::Right),
        "CONFIRM" => Some(NavKind::Confirm),
        "BACK" => Some(NavKind::Back),
        "MENU" => Some(NavKind::Menu),
        _ => None,
    }
}

/// Map a key name to a NavKind; `menu_key` is the configured menu key name
///
/// Arrows are accepted both as DOM-style names ("ArrowUp") and as egui's
/// `Key::name()` ("Up").
pub fn map_key(key: &str, menu_key: &str) -> Option<NavKind> {
    match key {
        "ArrowUp" | "Up" => Some(NavKind::Up),
        "ArrowDown" | "Down" => Some(NavKind::Down),
        "ArrowLeft" | "Left" => Some(NavKind::Left),
        "ArrowRight" | "Right" => Some(NavKind::Right),
        "Enter" => Some(NavKind::Confirm),
        "Escape" => Some(NavKind::Back),
        k if !menu_key.is_empty() && k.eq_ignore_ascii_case(menu_key) => Some(NavKind::Menu),
        _ => None,
    }
}

/// Map a decoded gamepad button to a NavKind
pub fn map_button_to_nav(button: PadButton) -> Option<NavKind> {
    match button {
        PadButton::Up => Some(NavKind::Up),
        PadButton::Down => Some(NavKind::Down),
        PadButton::Left => Some(NavKind::Left),
        PadButton::Right => Some(NavKind::Right),

        PadButton::South => Some(NavKind::Confirm),
        PadButton::East => Some(NavKind::Back),
        PadButton::Start => Some(NavKind::Menu),

        // Not navigation inputs
        _ => None,
    }
}
