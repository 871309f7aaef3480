//! Workbench settings persistence.
//!
//! Settings live next to the snapshot, e.g. ~/.config/nexus/settings.json,
//! unless an explicit path is given.

use std::path::{Path, PathBuf};

use nexus_domain::WorkbenchSettings;
use tokio::fs;

use super::config_dir;
use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const SETTINGS_FILE: &str = "settings.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for workbench settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a repository reading and writing the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository at the default location in the config directory.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NoConfigDir` if the platform has no config directory.
    pub fn default_location() -> Result<Self, SettingsError> {
        config_dir()
            .map(|dir| Self::new(dir.join(SETTINGS_FILE)))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults when the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<WorkbenchSettings, SettingsError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(WorkbenchSettings::default());
        }

        let content = fs::read(&self.path).await?;
        Ok(from_json_bytes(&content)?)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, settings: &WorkbenchSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(&self.path, content).await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn settings_path_is_valid() {
        if let Ok(repo) = SettingsRepository::default_location() {
            assert!(repo.path().ends_with("nexus/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::new(dir.path().join("settings.json"));
        assert_eq!(repo.load().await.unwrap(), WorkbenchSettings::default());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::new(dir.path().join("conf/settings.json"));
        let settings = WorkbenchSettings {
            max_redirects: 2,
            log_filter: Some("nexus=debug".to_string()),
            ..WorkbenchSettings::default()
        };

        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "max_redirects = 3").unwrap();

        let result = SettingsRepository::new(&path).load().await;

        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
