//! Environment store
//!
//! Named variable sets, at most one of them active.

use nexus_domain::environment::{DEFAULT_ENVIRONMENT_ID, default_environments};
use nexus_domain::{Environment, validate_id};
use tracing::{debug, warn};

/// Owns the environments and the active-environment pointer.
///
/// Mutations against an unknown environment id are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentStore {
    environments: Vec<Environment>,
    active_id: Option<String>,
}

impl EnvironmentStore {
    /// Creates a store from existing environments.
    ///
    /// An active id that names no environment is dropped.
    #[must_use]
    pub fn new(environments: Vec<Environment>, active_id: Option<String>) -> Self {
        let mut store = Self {
            environments,
            active_id: None,
        };
        store.set_active(active_id.as_deref());
        store
    }

    /// Creates a store with the default environments, `local` active.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(default_environments(), Some(DEFAULT_ENVIRONMENT_ID.to_string()))
    }

    /// Adds an environment, replacing one with the same id.
    pub fn add_environment(&mut self, environment: Environment) {
        if validate_id(&environment.id).is_err() {
            warn!("ignoring environment with a blank id");
            return;
        }
        if let Some(existing) = self.get_mut(&environment.id) {
            *existing = environment;
        } else {
            debug!(id = %environment.id, "adding environment");
            self.environments.push(environment);
        }
    }

    /// Activates an environment, or clears the active one with `None`.
    pub fn set_active(&mut self, id: Option<&str>) {
        match id {
            None => self.active_id = None,
            Some(id) if self.get(id).is_some() => self.active_id = Some(id.to_string()),
            Some(id) => debug!(id, "ignoring unknown environment"),
        }
    }

    /// Sets a variable in an environment.
    pub fn update_variable(&mut self, env_id: &str, key: &str, value: &str) {
        if let Some(environment) = self.get_mut(env_id) {
            environment.set_variable(key, value);
        }
    }

    /// Removes a variable from an environment.
    pub fn delete_variable(&mut self, env_id: &str, key: &str) {
        if let Some(environment) = self.get_mut(env_id) {
            environment.remove_variable(key);
        }
    }

    /// Changes the display name of an environment.
    pub fn rename_environment(&mut self, env_id: &str, name: &str) {
        if let Some(environment) = self.get_mut(env_id) {
            environment.name = name.to_string();
        }
    }

    /// Returns the active environment, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Environment> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Returns the id of the active environment.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns an environment by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == id)
    }

    /// Returns all environments in insertion order.
    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Environment> {
        self.environments.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_store() {
        let store = EnvironmentStore::seeded();
        assert_eq!(store.environments().len(), 3);
        assert_eq!(store.active_id(), Some("local"));
        assert_eq!(
            store.active().and_then(|e| e.get_variable("api_key")),
            Some("dev-key-123")
        );
    }

    #[test]
    fn test_set_active_and_clear() {
        let mut store = EnvironmentStore::seeded();
        store.set_active(Some("staging"));
        assert_eq!(store.active().map(|e| e.name.as_str()), Some("Staging"));

        store.set_active(None);
        assert!(store.active().is_none());
    }

    #[test]
    fn test_set_active_unknown_is_noop() {
        let mut store = EnvironmentStore::seeded();
        store.set_active(Some("nope"));
        assert_eq!(store.active_id(), Some("local"));
    }

    #[test]
    fn test_new_drops_dangling_active_id() {
        let store = EnvironmentStore::new(Vec::new(), Some("gone".to_string()));
        assert_eq!(store.active_id(), None);
    }

    #[test]
    fn test_add_environment_replaces_same_id() {
        let mut store = EnvironmentStore::seeded();
        store.add_environment(Environment::with_id("staging", "Staging 2"));
        store.add_environment(Environment::with_id("qa", "QA"));
        store.add_environment(Environment::with_id(" ", "Blank"));

        assert_eq!(store.environments().len(), 4);
        assert_eq!(store.get("staging").map(|e| e.name.as_str()), Some("Staging 2"));
    }

    #[test]
    fn test_update_and_delete_variable() {
        let mut store = EnvironmentStore::seeded();
        store.update_variable("local", "user_id", "42");
        store.update_variable("local", "base_url", "http://x");
        assert_eq!(store.get("local").and_then(|e| e.get_variable("user_id")), Some("42"));
        assert_eq!(store.get("local").and_then(|e| e.get_variable("base_url")), Some("http://x"));

        store.delete_variable("local", "user_id");
        assert_eq!(store.get("local").and_then(|e| e.get_variable("user_id")), None);
    }

    #[test]
    fn test_unknown_environment_mutations_are_noops() {
        let mut store = EnvironmentStore::seeded();
        let before = store.clone();
        store.update_variable("nope", "k", "v");
        store.delete_variable("nope", "base_url");
        store.rename_environment("nope", "Renamed");
        assert_eq!(store, before);
    }

    #[test]
    fn test_rename_environment() {
        let mut store = EnvironmentStore::seeded();
        store.rename_environment("production", "Prod");
        assert_eq!(store.get("production").map(|e| e.name.as_str()), Some("Prod"));
    }
}
