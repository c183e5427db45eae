//! Navigation vocabulary shared by every input device

/// The normalized action set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKind {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    Menu,
}

impl NavKind {
    pub fn is_direction(self) -> bool {
        matches!(self, NavKind::Up | NavKind::Down | NavKind::Left | NavKind::Right)
    }

    /// -1 for Up/Left, +1 for Down/Right, 0 otherwise
    pub fn delta(self) -> i32 {
        match self {
            NavKind::Up | NavKind::Left => -1,
            NavKind::Down | NavKind::Right => 1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    Keyboard,
    Gamepad,
}

/// One normalized navigation event; consumed within a single dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationEvent {
    pub kind: NavKind,
    /// Analog amount in 0..=1 (e.g. stick deflection), used for slider nudges
    pub magnitude: Option<f32>,
    pub origin: EventOrigin,
}

impl NavigationEvent {
    pub fn keyboard(kind: NavKind) -> Self {
        Self { kind, magnitude: None, origin: EventOrigin::Keyboard }
    }

    pub fn gamepad(kind: NavKind, magnitude: Option<f32>) -> Self {
        Self { kind, magnitude, origin: EventOrigin::Gamepad }
    }
}
