//! Persisted workspace snapshot
//!
//! Only long-lived state is persisted. Open tabs and the active tab are
//! session-only and never part of a snapshot.

use serde::{Deserialize, Serialize};

use crate::collection::DEFAULT_COLLECTION;
use crate::environment::{DEFAULT_ENVIRONMENT_ID, Environment, default_environments};
use crate::history::{HISTORY_LIMIT, HistoryEntry};
use crate::request::Request;

/// Serializable state exchanged with the persistence channel.
///
/// Every field has a default so that snapshots written by older versions
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    /// Saved requests, each tagged with its collection.
    #[serde(default)]
    pub collections: Vec<Request>,
    /// Collection new requests are tagged with.
    #[serde(default = "default_active_collection")]
    pub active_collection: String,
    /// Known environments.
    #[serde(default = "default_environments")]
    pub environments: Vec<Environment>,
    /// Active environment id; an explicit `null` means none is active.
    #[serde(default = "default_active_environment_id")]
    pub active_environment_id: Option<String>,
    /// Executed requests, newest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

fn default_active_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_active_environment_id() -> Option<String> {
    Some(DEFAULT_ENVIRONMENT_ID.to_string())
}

impl WorkspaceSnapshot {
    /// Drops history entries beyond the retention limit.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.history.truncate(HISTORY_LIMIT);
        if self.active_collection.trim().is_empty() {
            self.active_collection = default_active_collection();
        }
        self
    }
}

impl Default for WorkspaceSnapshot {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            active_collection: default_active_collection(),
            environments: default_environments(),
            active_environment_id: default_active_environment_id(),
            history: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_loads_defaults() {
        let snapshot: WorkspaceSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, WorkspaceSnapshot::default());
        assert_eq!(snapshot.active_collection, "Default");
        assert_eq!(snapshot.environments.len(), 3);
    }

    #[test]
    fn test_older_snapshot_without_active_collection() {
        let json = r#"{
            "collections": [{"id": "r1", "name": "Ping", "method": "GET", "url": "/ping", "headers": {}, "body": ""}],
            "environments": [{"id": "e1", "name": "Only", "variables": {"k": "v"}}],
            "activeEnvironmentId": "e1",
            "history": []
        }"#;
        let snapshot: WorkspaceSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.active_collection, "Default");
        assert_eq!(snapshot.collections.len(), 1);
        assert_eq!(snapshot.environments[0].id, "e1");
        assert_eq!(snapshot.active_environment_id.as_deref(), Some("e1"));
    }

    #[test]
    fn test_explicit_null_active_environment_stays_none() {
        let snapshot: WorkspaceSnapshot =
            serde_json::from_str(r#"{"activeEnvironmentId": null}"#).unwrap();
        assert_eq!(snapshot.active_environment_id, None);
    }

    #[test]
    fn test_snapshot_has_no_tab_fields() {
        let json = serde_json::to_value(WorkspaceSnapshot::default()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "activeCollection",
                "activeEnvironmentId",
                "collections",
                "environments",
                "history"
            ]
        );
    }

    #[test]
    fn test_normalized_truncates_history() {
        let mut snapshot = WorkspaceSnapshot::default();
        for i in 0..60 {
            snapshot
                .history
                .push(HistoryEntry::new(Request::new(format!("r{i}")), Utc::now()));
        }
        let snapshot = snapshot.normalized();
        assert_eq!(snapshot.history.len(), HISTORY_LIMIT);
        assert_eq!(snapshot.history[0].request.name, "r0");
    }
}
