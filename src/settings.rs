//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

const QUALIFIER: &str = "";
const ORGANIZATION: &str = "";
const APPLICATION: &str = "ProjexManager";
const DATA_FILE_NAME: &str = "projex.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the default data file location.
    pub data_file: Option<PathBuf>,
    /// A level (`debug`) for this crate, or a full `tracing` directive.
    /// `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Load from the OS config directory, falling back to defaults.
    /// Writes the defaults on first run so there is a file to edit.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save_to(&path) {
                warn!(path = %path.display(), "could not write default settings: {e}");
            }
            return settings;
        }
        Self::load_from(&path)
    }

    /// Missing file gives defaults; a malformed one is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), "ignoring invalid settings: {e}");
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Where the project store lives.
    pub fn data_path(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
            Some(dirs) => dirs.data_dir().join(DATA_FILE_NAME),
            None => PathBuf::from(".").join(DATA_FILE_NAME),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "log_filter": "debug" }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.data_file, None);
    }

    #[test]
    fn data_file_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_file: Some(dir.path().join("mine.json")),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.data_path(), dir.path().join("mine.json"));
    }

    #[test]
    fn default_data_path_uses_data_file_name() {
        let path = Settings::default().data_path();
        assert_eq!(path.file_name().unwrap(), DATA_FILE_NAME);
    }
}
