use crate::config::types::ShellConfig;
use crate::paths::PATH_TENFOOT;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn settings_path() -> PathBuf {
    PATH_TENFOOT.join("settings.json")
}

/// Read and migrate a settings file
pub fn load_cfg_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: ShellConfig =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.migrate();
    Ok(config)
}

/// Load settings from the data directory
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_cfg() -> ShellConfig {
    let path = settings_path();
    if !path.exists() {
        return ShellConfig::default();
    }
    match load_cfg_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config: {}, using defaults", e);
            ShellConfig::default()
        }
    }
}

pub fn save_cfg_to(path: &Path, config: &ShellConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_cfg(config: &ShellConfig) -> Result<(), ConfigError> {
    save_cfg_to(&settings_path(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OverlayDismissFocus;

    #[test]
    fn save_then_load_keeps_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        let config = ShellConfig {
            debounce_ms: 120,
            overlay_dismiss_focus: OverlayDismissFocus::Restore,
            ..Default::default()
        };
        save_cfg_to(&path, &config).unwrap();

        let loaded = load_cfg_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_cfg_from(&path), Err(ConfigError::Io { .. })));
    }
}
