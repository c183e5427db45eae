//! Desktop host for the navigation engine

pub mod app;
pub mod requests;
pub mod theme;

// Re-exports
pub use app::TenfootApp;
pub use requests::{QueuedCallbacks, RequestQueue, ShellRequest, ShellState};
pub use theme::apply_theme;
