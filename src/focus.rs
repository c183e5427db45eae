//! Focus navigation state machine
//!
//! One `FocusArea` is active at a time and routes every navigation event.
//! Transitions are computed by pure functions returning `NavAction`s; the
//! engine applies them and settles focus as overlays open and close.

pub mod pipelines;
pub mod pure;
pub mod types;

#[cfg(test)]
mod tests;

// Re-exports
pub use pipelines::{FocusEngine, ShellCallbacks};
pub use types::{ActiveIndices, FocusArea, GameMenuItem, NavAction, NavContext};
