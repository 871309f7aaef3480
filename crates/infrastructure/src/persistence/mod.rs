//! File-backed persistence for the workspace snapshot and settings.

mod settings_repository;
mod snapshot_store;

pub use settings_repository::{SettingsError, SettingsRepository};
pub use snapshot_store::{FileSnapshotStore, SnapshotError};

use std::path::PathBuf;

/// Returns the Nexus config directory, e.g. `~/.config/nexus`.
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nexus"))
}
