// Gamepad hotplug monitoring via udev

use std::os::unix::io::AsRawFd;

/// Hotplug notification for an evdev node
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    Added(String),
    Removed(String),
}

/// Only event nodes carry the button stream (not js*, mouse*)
fn is_event_node(path: &str) -> bool {
    path.starts_with("/dev/input/event")
}

/// Watches the input subsystem for connect/disconnect
pub struct DeviceMonitor {
    socket: udev::MonitorSocket,
}

impl DeviceMonitor {
    pub fn new() -> Result<Self, std::io::Error> {
        let socket = udev::MonitorBuilder::new()?
            .match_subsystem("input")?
            .listen()?;

        // The shell polls once per frame, so reads must not block
        unsafe {
            let fd = socket.as_raw_fd();
            let flags = libc::fcntl(fd, libc::F_GETFL);
            libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK);
        }

        Ok(Self { socket })
    }

    /// Drain pending hotplug events (non-blocking)
    pub fn poll_events(&mut self) -> Vec<DeviceEvent> {
        self.socket
            .iter()
            .filter_map(|event| {
                let path = event.devnode()?.to_string_lossy().to_string();
                if !is_event_node(&path) {
                    return None;
                }
                match event.event_type() {
                    udev::EventType::Add => Some(DeviceEvent::Added(path)),
                    udev::EventType::Remove => Some(DeviceEvent::Removed(path)),
                    _ => None,
                }
            })
            .collect()
    }
}
