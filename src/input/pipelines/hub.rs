// Gamepad hub: owns the evdev pads and the udev monitor, polled once per frame

use crate::config::PadFilterType;
use crate::input::operations::{open_device, scan_gamepads, DeviceEvent, DeviceMonitor, PadDevice};
use crate::input::types::{PadButton, PadPoll};

#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
    /// A pad was plugged in; carries its identifier for brand detection
    Connected(String),
    Disconnected(String),
    /// A decoded press on the pad at `pad` (index into `pads()`)
    Button {
        pad: usize,
        button: PadButton,
        magnitude: Option<f32>,
    },
}

pub struct GamepadHub {
    pads: Vec<PadDevice>,
    monitor: Option<DeviceMonitor>,
    filter: PadFilterType,
}

impl GamepadHub {
    pub fn new(filter: PadFilterType) -> Self {
        let pads = scan_gamepads(&filter);
        for pad in &pads {
            log::info!("evdev: Found gamepad {} ({})", pad.name(), pad.path());
        }

        let monitor = match DeviceMonitor::new() {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("udev: Hotplug monitoring unavailable: {}", e);
                None
            }
        };

        Self { pads, monitor, filter }
    }

    pub fn pads(&self) -> &[PadDevice] {
        &self.pads
    }

    /// Hotplug first, then one button per enabled pad
    pub fn poll(&mut self) -> Vec<HubEvent> {
        let mut out = self.poll_hotplug();

        for (idx, pad) in self.pads.iter_mut().enumerate() {
            if !pad.enabled() {
                continue;
            }
            match pad.poll() {
                PadPoll::Button(button, magnitude) => {
                    out.push(HubEvent::Button { pad: idx, button, magnitude });
                }
                // The pad disables itself; udev removal drops the entry
                PadPoll::Disconnected(reason) => {
                    log::info!("evdev: {}", reason);
                    out.push(HubEvent::Disconnected(pad.name().to_string()));
                }
                PadPoll::None => {}
            }
        }

        out
    }

    fn poll_hotplug(&mut self) -> Vec<HubEvent> {
        let Some(monitor) = &mut self.monitor else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for event in monitor.poll_events() {
            match event {
                DeviceEvent::Added(path) => {
                    // Drop any stale entry for a reused node
                    self.pads.retain(|d| d.path() != path);
                    if let Some(pad) = open_device(&path, &self.filter) {
                        log::info!("udev: Gamepad connected: {} ({})", pad.name(), path);
                        out.push(HubEvent::Connected(pad.name().to_string()));
                        self.pads.push(pad);
                        self.pads.sort_by_key(|d| d.path().to_string());
                    }
                }
                DeviceEvent::Removed(path) => {
                    if let Some(idx) = self.pads.iter().position(|d| d.path() == path) {
                        let pad = self.pads.remove(idx);
                        log::info!("udev: Gamepad removed: {} ({})", pad.name(), path);
                        out.push(HubEvent::Disconnected(pad.name().to_string()));
                    }
                }
            }
        }
        out
    }
}
