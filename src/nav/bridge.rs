//! Bridge from raw device signals to `NavigationEvent`s
//!
//! Gamepad-origin events share one debounce window so a held button can't
//! fire faster than the window allows. Keyboard events are edge-triggered:
//! each physical press yields exactly one event and auto-repeat is dropped.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::input::PadButton;
use crate::listeners::{Listeners, Subscription};
use crate::nav::pure::input_map::{map_action_str, map_button_to_nav, map_key};
use crate::nav::types::{NavKind, NavigationEvent};

/// Minimum spacing between accepted events
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self { window, last_accepted: None }
    }

    /// Accept and record `now` unless it falls inside the window
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.window {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

pub struct NavigationBridge {
    debounce: Debounce,
    menu_key: String,
    held_keys: HashSet<String>,
    listeners: Listeners<NavigationEvent>,
}

impl NavigationBridge {
    pub fn new(debounce_window: Duration, menu_key: impl Into<String>) -> Self {
        Self {
            debounce: Debounce::new(debounce_window),
            menu_key: menu_key.into(),
            held_keys: HashSet::new(),
            listeners: Listeners::new(),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&NavigationEvent) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    /// Platform bridge action string ("UP", "CONFIRM", ...)
    pub fn push_gamepad_action(&mut self, action: &str, now: Instant) -> Option<NavigationEvent> {
        self.push_gamepad_action_with_magnitude(action, None, now)
    }

    pub fn push_gamepad_action_with_magnitude(
        &mut self,
        action: &str,
        magnitude: Option<f32>,
        now: Instant,
    ) -> Option<NavigationEvent> {
        let Some(kind) = map_action_str(action) else {
            log::trace!("bridge: Ignoring unknown gamepad action {:?}", action);
            return None;
        };
        self.emit_gamepad(kind, magnitude, now)
    }

    /// Decoded evdev button, routed straight in without a synthetic key event
    pub fn push_pad_button(
        &mut self,
        button: PadButton,
        magnitude: Option<f32>,
        now: Instant,
    ) -> Option<NavigationEvent> {
        let kind = map_button_to_nav(button)?;
        self.emit_gamepad(kind, magnitude, now)
    }

    /// Key-down by key name; `repeat` marks toolkit auto-repeat
    pub fn push_key_down(&mut self, key: &str, repeat: bool) -> Option<NavigationEvent> {
        // insert() is false while the key is still held from an earlier press
        if repeat || !self.held_keys.insert(key.to_string()) {
            return None;
        }
        let kind = map_key(key, &self.menu_key)?;
        let event = NavigationEvent::keyboard(kind);
        self.listeners.emit(&event);
        Some(event)
    }

    pub fn push_key_up(&mut self, key: &str) {
        self.held_keys.remove(key);
    }

    /// Forget held keys, e.g. when the window loses focus and key-ups are lost
    pub fn release_all_keys(&mut self) {
        self.held_keys.clear();
    }

    fn emit_gamepad(&mut self, kind: NavKind, magnitude: Option<f32>, now: Instant) -> Option<NavigationEvent> {
        if !self.debounce.accept(now) {
            return None;
        }
        let event = NavigationEvent::gamepad(kind, magnitude);
        self.listeners.emit(&event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::types::EventOrigin;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bridge() -> NavigationBridge {
        NavigationBridge::new(Duration::from_millis(150), "M")
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn gamepad_events_inside_window_are_dropped() {
        let mut b = bridge();
        let t0 = Instant::now();
        assert!(b.push_gamepad_action("DOWN", t0).is_some());
        assert!(b.push_gamepad_action("DOWN", t0 + ms(80)).is_none());
    }

    #[test]
    fn gamepad_events_outside_window_pass() {
        let mut b = bridge();
        let t0 = Instant::now();
        assert!(b.push_gamepad_action("DOWN", t0).is_some());
        assert!(b.push_gamepad_action("DOWN", t0 + ms(200)).is_some());
    }

    #[test]
    fn window_is_measured_from_last_accepted_event() {
        let mut b = bridge();
        let t0 = Instant::now();
        assert!(b.push_gamepad_action("RIGHT", t0).is_some());
        assert!(b.push_gamepad_action("RIGHT", t0 + ms(100)).is_none());
        // 160ms after the accepted one, even though only 60ms after the dropped one
        assert!(b.push_gamepad_action("RIGHT", t0 + ms(160)).is_some());
    }

    #[test]
    fn pad_buttons_share_the_debounce_window() {
        let mut b = bridge();
        let t0 = Instant::now();
        assert!(b.push_pad_button(PadButton::South, None, t0).is_some());
        assert!(b.push_gamepad_action("BACK", t0 + ms(50)).is_none());
    }

    #[test]
    fn unknown_input_does_not_consume_the_window() {
        let mut b = bridge();
        let t0 = Instant::now();
        assert!(b.push_gamepad_action("SHARE", t0).is_none());
        assert!(b.push_pad_button(PadButton::Select, None, t0).is_none());
        assert!(b.push_gamepad_action("UP", t0 + ms(10)).is_some());
    }

    #[test]
    fn keyboard_is_never_debounced() {
        let mut b = bridge();
        let t0 = Instant::now();
        b.push_gamepad_action("DOWN", t0);

        let first = b.push_key_down("ArrowDown", false);
        b.push_key_up("ArrowDown");
        let second = b.push_key_down("ArrowDown", false);

        assert_eq!(first.map(|e| e.origin), Some(EventOrigin::Keyboard));
        assert!(second.is_some());
    }

    #[test]
    fn held_key_fires_once() {
        let mut b = bridge();
        assert!(b.push_key_down("ArrowLeft", false).is_some());
        assert!(b.push_key_down("ArrowLeft", false).is_none());
        assert!(b.push_key_down("ArrowLeft", true).is_none());
        b.push_key_up("ArrowLeft");
        assert!(b.push_key_down("ArrowLeft", false).is_some());
    }

    #[test]
    fn egui_arrow_keys_navigate() {
        use eframe::egui::Key;

        let mut b = bridge();
        let kinds: Vec<Option<NavKind>> = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight]
            .iter()
            .map(|key| b.push_key_down(key.name(), false).map(|e| e.kind))
            .collect();

        assert_eq!(
            kinds,
            vec![Some(NavKind::Up), Some(NavKind::Down), Some(NavKind::Left), Some(NavKind::Right)]
        );
    }

    #[test]
    fn menu_key_and_unknown_keys() {
        let mut b = bridge();
        assert_eq!(b.push_key_down("M", false).map(|e| e.kind), Some(NavKind::Menu));
        assert!(b.push_key_down("Q", false).is_none());
    }

    #[test]
    fn subscribers_receive_events() {
        let mut b = bridge();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            b.subscribe(move |e| seen.borrow_mut().push(e.kind))
        };

        let t0 = Instant::now();
        b.push_gamepad_action_with_magnitude("LEFT", Some(0.5), t0);
        b.push_key_down("Enter", false);
        sub.unsubscribe();
        b.push_key_down("Escape", false);

        assert_eq!(*seen.borrow(), vec![NavKind::Left, NavKind::Confirm]);
    }
}
