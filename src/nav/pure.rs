pub mod input_map;

// Re-exports
pub use input_map::{map_action_str, map_button_to_nav, map_key};
