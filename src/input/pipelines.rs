// Input pipelines - arbitration and device orchestration

pub mod arbiter;
pub mod hub;

pub use arbiter::{DeviceArbiter, DeviceChange};
pub use hub::{GamepadHub, HubEvent};
