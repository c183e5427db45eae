pub mod engine;

// Re-exports
pub use engine::{FocusEngine, ShellCallbacks};
