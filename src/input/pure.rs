pub mod brand;
pub mod classify;

// Re-exports
pub use brand::{brand_from_identifier, brand_from_vendor, brand_of};
pub use classify::{calculate_stick_calibration, classify_device, is_device_enabled, stick_magnitude};
