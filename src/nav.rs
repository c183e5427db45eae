//! Navigation event bridge
//!
//! Normalizes gamepad actions, decoded pad buttons and keyboard keys into one
//! `NavigationEvent` stream.

pub mod bridge;
pub mod pure;
pub mod types;

// Re-exports
pub use bridge::{Debounce, NavigationBridge};
pub use types::{EventOrigin, NavKind, NavigationEvent};
