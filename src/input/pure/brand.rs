// Controller brand inference (pure functions)

use crate::input::types::{ControllerBrand, GamepadSource};

const STEAM_INPUT_VENDOR: u16 = 0x28de;

/// Infer the brand from a controller identifier string
///
/// Case-insensitive substring match. Anything unrecognized is treated as an
/// Xbox-layout pad, which is what most generic XInput pads emulate.
pub fn brand_from_identifier(identifier: &str) -> ControllerBrand {
    let id = identifier.to_lowercase();
    if id.contains("sony") || id.contains("dual") || id.contains("ps") {
        ControllerBrand::PlayStation
    } else if id.contains("nintendo") || id.contains("switch") {
        ControllerBrand::Switch
    } else {
        ControllerBrand::Xbox
    }
}

/// Brand hint from the USB vendor id
pub fn brand_from_vendor(vendor: u16) -> Option<ControllerBrand> {
    match vendor {
        0x045e => Some(ControllerBrand::Xbox),
        0x054c => Some(ControllerBrand::PlayStation),
        0x057e => Some(ControllerBrand::Switch),
        _ => None,
    }
}

/// Brand of a connected pad; the vendor id is only consulted for unnamed devices
pub fn brand_of(pad: &impl GamepadSource) -> ControllerBrand {
    let identifier = pad.identifier().trim();
    if !identifier.is_empty() {
        return brand_from_identifier(identifier);
    }
    match pad.vendor_id() {
        STEAM_INPUT_VENDOR => ControllerBrand::Generic,
        vendor => brand_from_vendor(vendor).unwrap_or(ControllerBrand::Generic),
    }
}
