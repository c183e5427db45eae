// PadDevice: one evdev gamepad node (I/O: calls fetch_events)

use std::collections::HashSet;
use std::time::{Duration, Instant};

use evdev::*;

use crate::input::pure::classify::stick_magnitude;
use crate::input::types::{GamepadSource, PadButton, PadPoll, StickDirection};

// Hold-to-repeat timing for the analog stick
const INITIAL_DELAY: Duration = Duration::from_millis(300);
const REPEAT_RATE: Duration = Duration::from_millis(80);
const MAX_EVENTS_PER_POLL: usize = 256;
const ENODEV: i32 = 19;

pub struct PadDevice {
    path: String,
    dev: Device,
    name: String,
    vendor: u16,
    enabled: bool,
    held: HashSet<u16>,
    // Stick positions persist between polls; events only report changes
    stick_x: i32,
    stick_y: i32,
    stick_hold_start: Option<Instant>,
    stick_hold_direction: Option<StickDirection>,
    stick_last_repeat: Instant,
    stick_center: i32,
    stick_threshold: i32,
}

impl PadDevice {
    pub fn new(path: String, dev: Device, enabled: bool, stick_center: i32, stick_threshold: i32) -> Self {
        let name = dev.name().unwrap_or("").to_string();
        let vendor = dev.input_id().vendor();
        Self {
            path,
            dev,
            name,
            vendor,
            enabled,
            held: HashSet::new(),
            stick_x: stick_center,
            stick_y: stick_center,
            stick_hold_start: None,
            stick_hold_direction: None,
            stick_last_repeat: Instant::now(),
            stick_center,
            stick_threshold,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Stick direction with hold-to-repeat: first push fires, then repeats after a delay
    fn handle_stick_direction(&mut self, new_dir: Option<StickDirection>, now: Instant) -> Option<StickDirection> {
        match (new_dir, self.stick_hold_direction) {
            (Some(dir), held) if held != Some(dir) => {
                self.stick_hold_start = Some(now);
                self.stick_hold_direction = Some(dir);
                self.stick_last_repeat = now;
                Some(dir)
            }
            (Some(dir), Some(_)) => {
                let hold_start = self.stick_hold_start?;
                if now.duration_since(hold_start) > INITIAL_DELAY
                    && now.duration_since(self.stick_last_repeat) > REPEAT_RATE
                {
                    self.stick_last_repeat = now;
                    Some(dir)
                } else {
                    None
                }
            }
            (None, Some(_)) => {
                self.stick_hold_start = None;
                self.stick_hold_direction = None;
                None
            }
            _ => None,
        }
    }

    fn stick_direction(&self) -> Option<StickDirection> {
        let lo = self.stick_center - self.stick_threshold;
        let hi = self.stick_center + self.stick_threshold;
        if self.stick_y < lo {
            Some(StickDirection::Up)
        } else if self.stick_y > hi {
            Some(StickDirection::Down)
        } else if self.stick_x < lo {
            Some(StickDirection::Left)
        } else if self.stick_x > hi {
            Some(StickDirection::Right)
        } else {
            None
        }
    }

    fn map_event(summary: &EventSummary) -> Option<PadButton> {
        match summary {
            EventSummary::Key(_, KeyCode::BTN_SOUTH, 1) => Some(PadButton::South),
            EventSummary::Key(_, KeyCode::BTN_EAST, 1) => Some(PadButton::East),
            EventSummary::Key(_, KeyCode::BTN_NORTH, 1) => Some(PadButton::North),
            EventSummary::Key(_, KeyCode::BTN_WEST, 1) => Some(PadButton::West),
            EventSummary::Key(_, KeyCode::BTN_START, 1) => Some(PadButton::Start),
            EventSummary::Key(_, KeyCode::BTN_SELECT, 1) => Some(PadButton::Select),
            EventSummary::Key(_, KeyCode::BTN_TL, 1) => Some(PadButton::LB),
            EventSummary::Key(_, KeyCode::BTN_TR, 1) => Some(PadButton::RB),
            // D-pad as hat axis
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, -1) => Some(PadButton::Left),
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0X, 1) => Some(PadButton::Right),
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, -1) => Some(PadButton::Up),
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, 1) => Some(PadButton::Down),
            // D-pad as buttons
            EventSummary::Key(_, KeyCode::BTN_DPAD_UP, 1) => Some(PadButton::Up),
            EventSummary::Key(_, KeyCode::BTN_DPAD_DOWN, 1) => Some(PadButton::Down),
            EventSummary::Key(_, KeyCode::BTN_DPAD_LEFT, 1) => Some(PadButton::Left),
            EventSummary::Key(_, KeyCode::BTN_DPAD_RIGHT, 1) => Some(PadButton::Right),
            _ => None,
        }
    }

    pub fn poll(&mut self) -> PadPoll {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> PadPoll {
        if !std::path::Path::new(&self.path).exists() {
            self.enabled = false;
            return PadPoll::Disconnected(format!("device node gone: {}", self.path));
        }

        let mut btn: Option<PadButton> = None;
        let mut disconnected: Option<String> = None;

        match self.dev.fetch_events() {
            Ok(events) => {
                for (count, event) in events.enumerate() {
                    if count >= MAX_EVENTS_PER_POLL {
                        self.enabled = false;
                        disconnected = Some(format!("event flood from {}, disabling device", self.path));
                        break;
                    }

                    let summary = event.destructure();
                    match summary {
                        EventSummary::Key(_, code, 1) => {
                            self.held.insert(code.0);
                        }
                        EventSummary::Key(_, code, 0) => {
                            self.held.remove(&code.0);
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, val) => self.stick_x = val,
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, val) => self.stick_y = val,
                        _ => {}
                    }

                    if let Some(pressed) = Self::map_event(&summary) {
                        btn = Some(pressed);
                    }
                }
            }
            Err(e) if e.raw_os_error() == Some(ENODEV) => {
                self.enabled = false;
                disconnected = Some(format!("device disconnected: {}", self.path));
            }
            Err(_) => {}
        }

        if let Some(reason) = disconnected {
            return PadPoll::Disconnected(reason);
        }

        // Discrete buttons win over the stick
        if let Some(b) = btn {
            return PadPoll::Button(b, None);
        }

        let dir = self.stick_direction();
        match self.handle_stick_direction(dir, now) {
            Some(dir) => {
                let value = match dir {
                    StickDirection::Up | StickDirection::Down => self.stick_y,
                    StickDirection::Left | StickDirection::Right => self.stick_x,
                };
                let magnitude = stick_magnitude(value, self.stick_center, self.stick_threshold);
                PadPoll::Button(direction_to_button(dir), Some(magnitude))
            }
            None => PadPoll::None,
        }
    }
}

fn direction_to_button(dir: StickDirection) -> PadButton {
    match dir {
        StickDirection::Up => PadButton::Up,
        StickDirection::Down => PadButton::Down,
        StickDirection::Left => PadButton::Left,
        StickDirection::Right => PadButton::Right,
    }
}

impl GamepadSource for PadDevice {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn vendor_id(&self) -> u16 {
        self.vendor
    }

    fn any_button_pressed(&self) -> bool {
        self.enabled && !self.held.is_empty()
    }
}
