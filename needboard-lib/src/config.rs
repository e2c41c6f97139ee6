use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fs::{config_dir, state_dir};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "core.toml";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    version: u16,
    /// Where `data.db` lives. Defaults to the XDG state directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Load the configuration from the XDG config directory, writing the defaults out if the
    /// file doesn't exist yet. An unreadable file yields the defaults.
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("No configuration directory available ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let parsed: Result<Self, String> = fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|contents| toml::from_str(&contents).map_err(|e| e.to_string()));

            match parsed {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Ignoring unreadable configuration at {}: {e}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            if let Err(e) = cfg.save_to(path) {
                warn!("Failed to write default configuration: {e}");
            }
            cfg
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        debug!("Saved configuration to {}", path.display());

        Ok(())
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// The directory holding the record database, created if missing.
    pub fn state_dir(&self) -> Result<PathBuf, Error> {
        match &self.state_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => Ok(state_dir()?),
        }
    }

    pub fn set_state_dir(&mut self, dir: impl Into<PathBuf>) {
        self.state_dir = Some(dir.into());
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            state_dir: None,
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path);

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let mut cfg = CoreConfig::default();
        cfg.set_state_dir(dir.path().join("state"));
        cfg.save_to(&path).unwrap();

        let loaded = CoreConfig::load_from(&path);

        assert_eq!(loaded, cfg);
        assert_eq!(loaded.version(), CURRENT_CONFIG_VERSION);
        assert_eq!(loaded.state_dir().unwrap(), dir.path().join("state"));
        assert!(dir.path().join("state").exists());
    }

    #[test]
    fn test_unreadable_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "version = \"not a number\"").unwrap();

        assert_eq!(CoreConfig::load_from(&path), CoreConfig::default());
    }
}
