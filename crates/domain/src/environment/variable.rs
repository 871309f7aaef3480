//! Environment variable types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// Variables of an environment keyed by name. Values are plain strings.
pub type VariableMap = BTreeMap<String, String>;

/// Id of the environment that is active in a fresh workspace.
pub const DEFAULT_ENVIRONMENT_ID: &str = "local";

/// A named set of variables used to resolve `{{name}}` templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Variables available for substitution.
    #[serde(default)]
    pub variables: VariableMap,
}

impl Environment {
    /// Creates a new empty environment with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name)
    }

    /// Creates a new empty environment with the given id.
    #[must_use]
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variables: VariableMap::new(),
        }
    }

    /// Returns this environment with a variable added.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_variable(key, value);
        self
    }

    /// Adds or updates a variable in this environment.
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Gets a variable value by name.
    #[must_use]
    pub fn get_variable(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Removes a variable by name.
    pub fn remove_variable(&mut self, key: &str) -> Option<String> {
        self.variables.remove(key)
    }
}

/// The environments a new workspace starts with.
#[must_use]
pub fn default_environments() -> Vec<Environment> {
    vec![
        Environment::with_id(DEFAULT_ENVIRONMENT_ID, "Local")
            .with_variable("base_url", "http://localhost:3000")
            .with_variable("api_key", "dev-key-123"),
        Environment::with_id("staging", "Staging")
            .with_variable("base_url", "https://api-staging.example.com")
            .with_variable("api_key", "staging-key-456"),
        Environment::with_id("production", "Production")
            .with_variable("base_url", "https://api.example.com")
            .with_variable("api_key", "prod-key-789"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_remove_variable() {
        let mut env = Environment::new("dev");
        env.set_variable("host", "localhost");
        assert_eq!(env.get_variable("host"), Some("localhost"));

        env.set_variable("host", "127.0.0.1");
        assert_eq!(env.get_variable("host"), Some("127.0.0.1"));

        assert_eq!(env.remove_variable("host"), Some("127.0.0.1".to_string()));
        assert_eq!(env.get_variable("host"), None);
    }

    #[test]
    fn test_default_environments() {
        let envs = default_environments();
        let ids: Vec<&str> = envs.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["local", "staging", "production"]);
        assert_eq!(envs[0].get_variable("base_url"), Some("http://localhost:3000"));
    }
}
