//! Device arbitration
//!
//! Keeps track of which device class the user is currently driving the shell
//! with. Keyboard and pointer signals switch immediately; gamepads switch on
//! connect and, since a press does not always come with a connect signal, on
//! a low-frequency poll of every connected pad's buttons.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::input::pure::brand::{brand_from_identifier, brand_of};
use crate::input::types::{ControllerBrand, GamepadSource, InputDevice};
use crate::listeners::{Listeners, Subscription};

/// Notification payload for device listeners
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeviceChange {
    pub device: InputDevice,
    pub brand: ControllerBrand,
}

pub struct DeviceArbiter {
    device: InputDevice,
    brand: ControllerBrand,
    gamepad_active: Arc<AtomicBool>,
    listeners: Listeners<DeviceChange>,
    poll_interval: Duration,
    last_poll: Option<Instant>,
}

impl DeviceArbiter {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            device: InputDevice::Keyboard,
            brand: ControllerBrand::Generic,
            gamepad_active: Arc::new(AtomicBool::new(false)),
            listeners: Listeners::new(),
            poll_interval,
            last_poll: None,
        }
    }

    pub fn current_device(&self) -> InputDevice {
        self.device
    }

    /// Brand of the last active pad; only meaningful while the device is a gamepad
    pub fn controller_brand(&self) -> ControllerBrand {
        self.brand
    }

    pub fn on_device_change(&self, callback: impl FnMut(&DeviceChange) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    /// Shared flag the view reads to hide the pointer while a pad is in use
    pub fn gamepad_active_flag(&self) -> Arc<AtomicBool> {
        self.gamepad_active.clone()
    }

    pub fn is_gamepad_active(&self) -> bool {
        self.gamepad_active.load(Ordering::Relaxed)
    }

    pub fn on_key_down(&mut self) {
        self.set(InputDevice::Keyboard, self.brand);
    }

    pub fn on_pointer_move(&mut self) {
        self.set(InputDevice::Mouse, self.brand);
    }

    /// A pad was connected (or reported activity) under this identifier
    pub fn on_gamepad_connected(&mut self, identifier: &str) {
        self.set(InputDevice::Gamepad, brand_from_identifier(identifier));
    }

    /// Activity on a known pad, resolving the brand with the vendor fallback
    pub fn on_gamepad_activity(&mut self, pad: &impl GamepadSource) {
        self.set(InputDevice::Gamepad, brand_of(pad));
    }

    /// Run the button poll if the interval has elapsed
    ///
    /// The first pad found with a pressed button makes the gamepad the active
    /// device. Returns true when the poll ran.
    pub fn poll_gamepads<'a, S>(&mut self, pads: impl IntoIterator<Item = &'a S>, now: Instant) -> bool
    where
        S: GamepadSource + 'a,
    {
        if let Some(last) = self.last_poll {
            if now.duration_since(last) < self.poll_interval {
                return false;
            }
        }
        self.last_poll = Some(now);

        if let Some(pad) = pads.into_iter().find(|pad| pad.any_button_pressed()) {
            self.on_gamepad_activity(pad);
        }
        true
    }

    fn set(&mut self, device: InputDevice, brand: ControllerBrand) {
        self.gamepad_active
            .store(device == InputDevice::Gamepad, Ordering::Relaxed);

        if device == self.device && brand == self.brand {
            return;
        }
        log::debug!(
            "arbiter: {:?}/{:?} -> {:?}/{:?}",
            self.device,
            self.brand,
            device,
            brand
        );
        self.device = device;
        self.brand = brand;
        self.listeners.emit(&DeviceChange { device, brand });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakePad {
        name: &'static str,
        pressed: bool,
    }

    impl GamepadSource for FakePad {
        fn identifier(&self) -> &str {
            self.name
        }
        fn any_button_pressed(&self) -> bool {
            self.pressed
        }
    }

    fn arbiter() -> DeviceArbiter {
        DeviceArbiter::new(Duration::from_millis(200))
    }

    #[test]
    fn starts_on_keyboard() {
        let arb = arbiter();
        assert_eq!(arb.current_device(), InputDevice::Keyboard);
        assert!(!arb.is_gamepad_active());
    }

    #[test]
    fn pointer_then_key_switches_immediately() {
        let mut arb = arbiter();
        arb.on_pointer_move();
        assert_eq!(arb.current_device(), InputDevice::Mouse);
        arb.on_key_down();
        assert_eq!(arb.current_device(), InputDevice::Keyboard);
    }

    #[test]
    fn connect_sets_gamepad_and_brand() {
        let mut arb = arbiter();
        arb.on_gamepad_connected("Sony DualSense Wireless Controller");
        assert_eq!(arb.current_device(), InputDevice::Gamepad);
        assert_eq!(arb.controller_brand(), ControllerBrand::PlayStation);
        assert!(arb.is_gamepad_active());

        arb.on_gamepad_connected("8BitDo Generic");
        assert_eq!(arb.controller_brand(), ControllerBrand::Xbox);
    }

    #[test]
    fn key_down_after_gamepad_returns_to_keyboard() {
        let mut arb = arbiter();
        let flag = arb.gamepad_active_flag();
        arb.on_gamepad_connected("Xbox Wireless Controller");
        assert!(flag.load(Ordering::Relaxed));

        arb.on_key_down();
        assert_eq!(arb.current_device(), InputDevice::Keyboard);
        assert!(!flag.load(Ordering::Relaxed));
    }

    #[test]
    fn poll_picks_first_pressed_pad() {
        let mut arb = arbiter();
        let pads = [
            FakePad { name: "Nintendo Switch Pro Controller", pressed: false },
            FakePad { name: "Sony Interactive Entertainment Wireless Controller", pressed: true },
        ];
        assert!(arb.poll_gamepads(&pads, Instant::now()));
        assert_eq!(arb.current_device(), InputDevice::Gamepad);
        assert_eq!(arb.controller_brand(), ControllerBrand::PlayStation);
    }

    #[test]
    fn poll_without_presses_keeps_device() {
        let mut arb = arbiter();
        arb.on_pointer_move();
        let pads = [FakePad { name: "Xbox", pressed: false }];
        arb.poll_gamepads(&pads, Instant::now());
        assert_eq!(arb.current_device(), InputDevice::Mouse);
    }

    #[test]
    fn poll_is_rate_limited() {
        let mut arb = arbiter();
        let start = Instant::now();
        let pads = [FakePad { name: "Xbox", pressed: true }];

        assert!(arb.poll_gamepads(&pads, start));
        arb.on_key_down();
        assert!(!arb.poll_gamepads(&pads, start + Duration::from_millis(100)));
        assert_eq!(arb.current_device(), InputDevice::Keyboard);

        assert!(arb.poll_gamepads(&pads, start + Duration::from_millis(200)));
        assert_eq!(arb.current_device(), InputDevice::Gamepad);
    }

    #[test]
    fn listeners_fire_only_on_change() {
        let mut arb = arbiter();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            arb.on_device_change(move |change| seen.borrow_mut().push(change.device))
        };

        arb.on_key_down(); // already keyboard
        arb.on_pointer_move();
        arb.on_pointer_move();
        arb.on_gamepad_connected("Xbox");
        sub.unsubscribe();
        arb.on_key_down();

        assert_eq!(*seen.borrow(), vec![InputDevice::Mouse, InputDevice::Gamepad]);
    }
}
