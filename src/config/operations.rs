// Config operations - settings file I/O

pub mod io;

pub use io::{load_cfg, load_cfg_from, save_cfg, save_cfg_to, ConfigError};
