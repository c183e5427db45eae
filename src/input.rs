//! Input device arbitration
//!
//! Decides which physical device (keyboard, mouse, gamepad) is active and,
//! for gamepads, which controller brand the icons should follow. The evdev and
//! udev backends feed pad buttons and hotplug names into the arbiter and the
//! navigation bridge.

pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use pipelines::arbiter::{DeviceArbiter, DeviceChange};
pub use pipelines::hub::{GamepadHub, HubEvent};
pub use pure::brand::{brand_from_identifier, brand_from_vendor, brand_of};
pub use types::{ControllerBrand, DeviceKind, GamepadSource, InputDevice, PadButton, PadPoll};
