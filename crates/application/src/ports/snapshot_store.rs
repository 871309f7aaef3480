//! Snapshot store port
//!
//! Defines the persistence channel for the workspace snapshot.

use async_trait::async_trait;
use nexus_domain::WorkspaceSnapshot;

use crate::ApplicationResult;

/// Loads and saves the serializable part of the workspace.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// Returns `ApplicationError::Storage` if the snapshot exists but cannot be read.
    async fn load(&self) -> ApplicationResult<Option<WorkspaceSnapshot>>;

    /// Saves a snapshot, replacing the previous one.
    ///
    /// # Errors
    /// Returns `ApplicationError::Storage` if the snapshot cannot be written.
    async fn save(&self, snapshot: &WorkspaceSnapshot) -> ApplicationResult<()>;
}
