// Input device operations - evdev/udev I/O

pub mod device;
pub mod monitor;
pub mod scan;

pub use device::PadDevice;
pub use monitor::{DeviceEvent, DeviceMonitor};
pub use scan::{open_device, scan_gamepads};
