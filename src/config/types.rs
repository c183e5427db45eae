use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which evdev pads are allowed to drive navigation
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub enum PadFilterType {
    All,
    /// Skip Steam Input virtual pads (vendor 0x28de) to avoid double input
    #[default]
    NoSteamInput,
    OnlySteamInput,
}

/// Where focus lands once the last overlay or side panel closes
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub enum OverlayDismissFocus {
    /// Always land on the hero panel
    #[default]
    Hero,
    /// Return to whichever area was focused before the overlay opened
    Restore,
}

/// Main shell configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShellConfig {
    /// Minimum gap between two accepted gamepad events (milliseconds)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Interval of the connected-gamepad button poll (milliseconds)
    #[serde(default = "default_device_poll_ms")]
    pub device_poll_ms: u64,
    /// Keyboard key that opens the side menu (egui key name, e.g. "M" or "Tab")
    #[serde(default = "default_menu_key")]
    pub menu_key: String,
    /// Labels of the side menu rows; the count bounds `sidebar_index`
    #[serde(default = "default_sidebar_items")]
    pub sidebar_items: Vec<String>,
    /// Labels of the quick-settings sliders; the count bounds the slider index
    #[serde(default = "default_quick_settings_sliders")]
    pub quick_settings_sliders: Vec<String>,
    #[serde(default)]
    pub overlay_dismiss_focus: OverlayDismissFocus,
    #[serde(default)]
    pub pad_filter_type: PadFilterType,
    /// Games per carousel row; 0 groups rows by category instead
    #[serde(default)]
    pub carousel_row_len: usize,
    /// Library manifest override (None = default data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_path: Option<PathBuf>,
}

fn default_debounce_ms() -> u64 {
    150
}

fn default_device_poll_ms() -> u64 {
    200
}

fn default_menu_key() -> String {
    "M".to_string()
}

fn default_sidebar_items() -> Vec<String> {
    ["Home", "Library", "Search", "Settings", "Power"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_quick_settings_sliders() -> Vec<String> {
    ["Volume", "Brightness"].iter().map(|s| s.to_string()).collect()
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            debounce_ms: default_debounce_ms(),
            device_poll_ms: default_device_poll_ms(),
            menu_key: default_menu_key(),
            sidebar_items: default_sidebar_items(),
            quick_settings_sliders: default_quick_settings_sliders(),
            overlay_dismiss_focus: OverlayDismissFocus::Hero,
            pad_filter_type: PadFilterType::NoSteamInput,
            carousel_row_len: 0,
            library_path: None,
        }
    }
}

impl ShellConfig {
    /// Repair values that would leave a region without any selectable row
    /// Call this after loading config from disk
    pub fn migrate(&mut self) {
        if self.sidebar_items.is_empty() {
            self.sidebar_items = default_sidebar_items();
        }
        if self.quick_settings_sliders.is_empty() {
            self.quick_settings_sliders = default_quick_settings_sliders();
        }
        if self.device_poll_ms == 0 {
            self.device_poll_ms = default_device_poll_ms();
        }
    }
}
