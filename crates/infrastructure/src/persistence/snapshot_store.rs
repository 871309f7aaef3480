//! Workspace snapshot persistence.
//!
//! By default the snapshot lives in the platform-specific config directory:
//! - Linux: ~/.config/nexus/workspace.json
//! - macOS: ~/Library/Application Support/nexus/workspace.json
//! - Windows: %APPDATA%/nexus/workspace.json

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nexus_application::{ApplicationError, ApplicationResult, SnapshotStore};
use nexus_domain::WorkspaceSnapshot;
use tokio::fs;
use tracing::debug;

use super::config_dir;
use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const SNAPSHOT_FILE: &str = "workspace.json";

/// Error type for snapshot file operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
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

impl From<SnapshotError> for ApplicationError {
    fn from(error: SnapshotError) -> Self {
        Self::Storage(error.to_string())
    }
}

/// Stores the workspace snapshot as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default location in the config directory.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::NoConfigDir` if the platform has no config directory.
    pub fn default_location() -> Result<Self, SnapshotError> {
        config_dir()
            .map(|dir| Self::new(dir.join(SNAPSHOT_FILE)))
            .ok_or(SnapshotError::NoConfigDir)
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot, or `None` if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn read(&self) -> Result<Option<WorkspaceSnapshot>, SnapshotError> {
        if !fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "no snapshot on disk");
            return Ok(None);
        }

        let content = fs::read(&self.path).await?;
        let snapshot: WorkspaceSnapshot = from_json_bytes(&content)?;
        Ok(Some(snapshot.normalized()))
    }

    /// Writes the snapshot, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write(&self, snapshot: &WorkspaceSnapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(snapshot)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), "snapshot saved");

        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> ApplicationResult<Option<WorkspaceSnapshot>> {
        Ok(self.read().await?)
    }

    async fn save(&self, snapshot: &WorkspaceSnapshot) -> ApplicationResult<()> {
        Ok(self.write(snapshot).await?)
    }
}
