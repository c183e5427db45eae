// Input device types

use egui_phosphor::regular as icons;

/// The physical device class currently driving the shell
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum InputDevice {
    #[default]
    Keyboard,
    Mouse,
    Gamepad,
}

impl InputDevice {
    /// Icon glyph for hint bars and the device indicator
    pub fn icon(self) -> &'static str {
        match self {
            InputDevice::Keyboard => icons::KEYBOARD,
            InputDevice::Mouse => icons::MOUSE,
            InputDevice::Gamepad => icons::GAME_CONTROLLER,
        }
    }
}

/// Controller family, used to pick button glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ControllerBrand {
    Xbox,
    PlayStation,
    Switch,
    #[default]
    Generic,
}

impl ControllerBrand {
    pub fn label(self) -> &'static str {
        match self {
            ControllerBrand::Xbox => "Xbox",
            ControllerBrand::PlayStation => "PlayStation",
            ControllerBrand::Switch => "Switch",
            ControllerBrand::Generic => "Generic",
        }
    }

    /// Label of the confirm button in this brand's layout
    pub fn confirm_label(self) -> &'static str {
        match self {
            ControllerBrand::PlayStation => "Cross",
            ControllerBrand::Switch => "B",
            ControllerBrand::Xbox | ControllerBrand::Generic => "A",
        }
    }

    /// Label of the back button in this brand's layout
    pub fn back_label(self) -> &'static str {
        match self {
            ControllerBrand::PlayStation => "Circle",
            ControllerBrand::Switch => "A",
            ControllerBrand::Xbox | ControllerBrand::Generic => "B",
        }
    }
}

/// evdev device class, from the keys a node advertises
#[derive(Clone, PartialEq, Copy, Debug)]
pub enum DeviceKind {
    Gamepad,
    Keyboard,
    Mouse,
    Other,
}

/// Decoded gamepad button, positional (south = bottom face button)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadButton {
    Up,
    Down,
    Left,
    Right,
    South,
    East,
    North,
    West,
    Start,
    Select,
    LB,
    RB,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StickDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Result of polling one pad
#[derive(Debug, PartialEq)]
pub enum PadPoll {
    /// A button press, with stick deflection (0..=1) when it came from an analog stick
    Button(PadButton, Option<f32>),
    /// Device node went away (reason for logging at the shell layer)
    Disconnected(String),
    None,
}

/// A connected gamepad as seen by the arbiter's button poll
pub trait GamepadSource {
    /// Human readable identifier, e.g. "Sony DualSense Wireless Controller"
    fn identifier(&self) -> &str;

    /// USB vendor id, 0 when unknown
    fn vendor_id(&self) -> u16 {
        0
    }

    fn any_button_pressed(&self) -> bool;
}
