// evdev device classification and stick calibration (pure functions)

use evdev::{AttributeSetRef, KeyCode};

use crate::config::PadFilterType;
use crate::input::types::DeviceKind;

const STEAM_INPUT_VENDOR: u16 = 0x28de;

/// Classify an evdev node by its supported keys
pub fn classify_device(supported_keys: Option<&AttributeSetRef<KeyCode>>) -> DeviceKind {
    let has = |code: KeyCode| supported_keys.is_some_and(|keys| keys.contains(code));
    if has(KeyCode::BTN_SOUTH) {
        DeviceKind::Gamepad
    } else if has(KeyCode::BTN_LEFT) {
        DeviceKind::Mouse
    } else if has(KeyCode::KEY_SPACE) {
        DeviceKind::Keyboard
    } else {
        DeviceKind::Other
    }
}

/// Check if a pad may drive navigation under the configured filter
pub fn is_device_enabled(filter: &PadFilterType, vendor_id: u16) -> bool {
    match filter {
        PadFilterType::All => true,
        PadFilterType::NoSteamInput => vendor_id != STEAM_INPUT_VENDOR,
        PadFilterType::OnlySteamInput => vendor_id == STEAM_INPUT_VENDOR,
    }
}

/// Stick center and direction threshold from the axis min/max
/// Returns (center, threshold) where threshold is 25% of range
pub fn calculate_stick_calibration(min: i32, max: i32) -> (i32, i32) {
    let center = (min + max) / 2;
    let range = max - min;
    (center, range / 4)
}

/// Normalized deflection of an axis value in 0..=1
pub fn stick_magnitude(value: i32, center: i32, threshold: i32) -> f32 {
    // threshold is a quarter of the range, so half range is 2x
    let half_range = (threshold * 2).max(1) as f32;
    ((value - center).abs() as f32 / half_range).min(1.0)
}
