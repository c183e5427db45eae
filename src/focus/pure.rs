pub mod navigation;

// Re-exports
pub use navigation::navigate;
