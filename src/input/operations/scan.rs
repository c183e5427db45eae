// Gamepad scanning operations (I/O: evdev enumeration, device opening)

use std::time::Duration;

use evdev::*;

use crate::config::PadFilterType;
use crate::input::operations::device::PadDevice;
use crate::input::pure::classify::{calculate_stick_calibration, classify_device, is_device_enabled};
use crate::input::types::DeviceKind;

// Used when a pad doesn't report ABS_X info: signed 16-bit range
const DEFAULT_CALIBRATION: (i32, i32) = (0, 8000);

fn stick_calibration(dev: &Device, path: &str) -> (i32, i32) {
    let Ok(abs_info) = dev.get_abs_state() else {
        return DEFAULT_CALIBRATION;
    };
    match abs_info.get(AbsoluteAxisCode::ABS_X.0 as usize) {
        Some(x_info) => {
            let (center, threshold) = calculate_stick_calibration(x_info.minimum, x_info.maximum);
            log::debug!(
                "evdev: {} stick range: {}-{}, center={}, threshold={}",
                path,
                x_info.minimum,
                x_info.maximum,
                center,
                threshold
            );
            (center, threshold)
        }
        None => DEFAULT_CALIBRATION,
    }
}

/// Turn an opened node into a PadDevice if it is a gamepad
fn into_pad(path: &str, dev: Device, filter: &PadFilterType) -> Option<PadDevice> {
    if classify_device(dev.supported_keys()) != DeviceKind::Gamepad {
        log::trace!("evdev: Skipping {} - not a gamepad", path);
        return None;
    }

    if dev.set_nonblocking(true).is_err() {
        log::warn!("evdev: Failed to set non-blocking mode for {}", path);
        return None;
    }

    let enabled = is_device_enabled(filter, dev.input_id().vendor());
    let (stick_center, stick_threshold) = stick_calibration(&dev, path);
    Some(PadDevice::new(path.to_string(), dev, enabled, stick_center, stick_threshold))
}

/// Scan /dev/input for gamepads
///
/// Keyboard and mouse activity reaches the shell through the window toolkit,
/// so only pads are opened here.
pub fn scan_gamepads(filter: &PadFilterType) -> Vec<PadDevice> {
    let mut pads: Vec<PadDevice> = evdev::enumerate()
        .filter_map(|(path, dev)| into_pad(&path.to_string_lossy(), dev, filter))
        .collect();
    pads.sort_by_key(|pad| pad.path().to_string());
    pads
}

/// Try to open a single device by path.
/// Retries with exponential backoff since udev can announce a node before its
/// permissions are applied.
pub fn open_device(path: &str, filter: &PadFilterType) -> Option<PadDevice> {
    const MAX_ATTEMPTS: u32 = 8;
    let mut attempts = 0;
    let mut delay = Duration::from_millis(50);

    let dev = loop {
        match Device::open(path) {
            Ok(d) => break d,
            Err(e) => {
                attempts += 1;
                let is_permission_error = e.kind() == std::io::ErrorKind::PermissionDenied;

                if attempts >= MAX_ATTEMPTS {
                    if is_permission_error {
                        log::warn!(
                            "evdev: Permission denied for {} - ensure your user is in the 'input' group",
                            path
                        );
                    } else {
                        log::warn!("evdev: Failed to open {} after {} attempts: {}", path, attempts, e);
                    }
                    return None;
                }

                // udev rules may be slow to apply
                let wait = if is_permission_error { delay * 2 } else { delay };
                std::thread::sleep(wait);
                delay = (delay * 2).min(Duration::from_millis(500));
            }
        }
    };

    into_pad(path, dev, filter)
}
