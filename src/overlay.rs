//! Overlay coordination: one full-screen modal slot with single-level
//! history, two independent side panels, and collaborator-owned blocking
//! modals, all folded into one suspension predicate.

pub mod coordinator;
pub mod types;

// Re-exports
pub use coordinator::OverlayCoordinator;
pub use types::{BlockingModal, OverlayId, OverlayState};
