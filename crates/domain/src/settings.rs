//! Workbench Settings Domain Model
//!
//! Defines the user-tunable configuration of the workbench.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings read at startup. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchSettings {
    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects the transport follows.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Where the workspace snapshot lives; platform config dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,

    /// Log filter directive, e.g. `"nexus=debug"`. `RUST_LOG` wins when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_user_agent() -> String {
    format!("Nexus/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_max_redirects() -> usize {
    10
}

impl Default for WorkbenchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            snapshot_path: None,
            log_filter: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_settings() {
        let settings = WorkbenchSettings::default();
        assert!(settings.user_agent.starts_with("Nexus/"));
        assert_eq!(settings.max_redirects, 10);
        assert_eq!(settings.snapshot_path, None);
        assert_eq!(settings.log_filter, None);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings: WorkbenchSettings =
            serde_json::from_str(r#"{"max_redirects": 3}"#).unwrap();
        assert_eq!(settings.max_redirects, 3);
        assert!(settings.user_agent.starts_with("Nexus/"));
    }
}
