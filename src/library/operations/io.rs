use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::library::types::Game;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("failed to read library {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed library {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// On-disk manifest: `games:` holds the ordered list
#[derive(Deserialize)]
struct LibraryManifest {
    #[serde(default)]
    games: Vec<Game>,
}

/// Load the ordered game list from a YAML manifest
pub fn load_library(path: &Path) -> Result<Vec<Game>, LibraryError> {
    let file = File::open(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: LibraryManifest =
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| LibraryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("library: Loaded {} games from {}", manifest.games.len(), path.display());
    Ok(manifest.games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_games_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.yaml");
        std::fs::write(
            &path,
            r#"
games:
  - id: hk
    title: Hollow Knight
    category: steam
  - id: cel
    title: Celeste
"#,
        )
        .unwrap();

        let games = load_library(&path).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, "hk");
        assert_eq!(games[1].category, "");
    }

    #[test]
    fn empty_manifest_is_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.yaml");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_library(&path).unwrap().is_empty());
    }

    #[test]
    fn malformed_manifest_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.yaml");
        std::fs::write(&path, "games: [ { id: 1").unwrap();
        assert!(matches!(load_library(&path), Err(LibraryError::Parse { .. })));
    }
}
