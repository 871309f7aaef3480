//! Workspace façade
//!
//! The single owner of the in-memory state. Every mutation goes through a
//! named method that takes the write lock, applies the change and releases
//! it, so observers never see a half-applied update.
//!
//! `send` is the only operation that suspends. It never holds the lock while
//! the transport is awaited, so other tabs (and the sending tab's own request
//! fields) stay editable while a call is in flight.

use std::sync::Arc;

use nexus_domain::{
    Environment, GroupedCollections, HistoryEntry, Request, RequestPatch, Response, Tab, TabPatch,
    WorkspaceSnapshot,
};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::ApplicationResult;
use crate::execute_request::RequestExecutor;
use crate::ports::{Clock, HttpTransport, SnapshotStore};
use crate::stores::{CollectionManager, EnvironmentStore, HistoryLog, TabStore};

#[derive(Debug, Clone, Default)]
struct WorkspaceState {
    environments: EnvironmentStore,
    tabs: TabStore,
    collections: CollectionManager,
    history: HistoryLog,
}

/// Shared handle to the workspace. Clones share the same state.
#[derive(Clone)]
pub struct Workspace {
    state: Arc<RwLock<WorkspaceState>>,
    executor: RequestExecutor,
    clock: Arc<dyn Clock>,
}

impl Workspace {
    /// Creates a fresh workspace: default environments (`local` active),
    /// the `"Default"` collection, no tabs and no history.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, clock: Arc<dyn Clock>) -> Self {
        let workspace = Self {
            state: Arc::new(RwLock::new(WorkspaceState::default())),
            executor: RequestExecutor::new(transport),
            clock,
        };
        workspace.restore(WorkspaceSnapshot::default());
        workspace
    }

    // Environments

    /// Adds an environment, replacing one with the same id.
    pub fn add_environment(&self, environment: Environment) {
        self.state.write().environments.add_environment(environment);
    }

    /// Activates an environment, or turns interpolation off with `None`.
    pub fn set_active_environment(&self, id: Option<&str>) {
        debug!(?id, "switching environment");
        self.state.write().environments.set_active(id);
    }

    /// Sets a variable in an environment.
    pub fn update_variable(&self, env_id: &str, key: &str, value: &str) {
        self.state
            .write()
            .environments
            .update_variable(env_id, key, value);
    }

    /// Removes a variable from an environment.
    pub fn delete_variable(&self, env_id: &str, key: &str) {
        self.state.write().environments.delete_variable(env_id, key);
    }

    /// Changes the display name of an environment.
    pub fn rename_environment(&self, env_id: &str, name: &str) {
        self.state
            .write()
            .environments
            .rename_environment(env_id, name);
    }

    /// Returns the active environment, if any.
    #[must_use]
    pub fn active_environment(&self) -> Option<Environment> {
        self.state.read().environments.active().cloned()
    }

    /// Returns all environments.
    #[must_use]
    pub fn environments(&self) -> Vec<Environment> {
        self.state.read().environments.environments().to_vec()
    }

    // Tabs

    /// Opens a tab tagged with the active collection and focuses it.
    pub fn add_tab(&self, partial: Option<RequestPatch>) -> String {
        let mut state = self.state.write();
        let active_collection = state.collections.active_collection().to_string();
        state.tabs.add_tab(partial, &active_collection)
    }

    /// Opens a blank request.
    ///
    /// This also clears the active environment, so a new request starts out
    /// with literal values. Call `set_active_environment` afterwards to
    /// resolve templates again.
    pub fn new_request(&self) -> String {
        let mut state = self.state.write();
        let active_collection = state.collections.active_collection().to_string();
        let tab_id = state.tabs.add_tab(None, &active_collection);
        state.environments.set_active(None);
        debug!(tab_id = %tab_id, "opened new request, environment cleared");
        tab_id
    }

    /// Opens a copy of a saved or historical request in a new tab.
    pub fn open_request(&self, request: &Request) -> String {
        self.add_tab(Some(RequestPatch::from(request.clone())))
    }

    /// Closes a tab. An in-flight send for it still lands in history.
    pub fn close_tab(&self, tab_id: &str) {
        self.state.write().tabs.close_tab(tab_id);
    }

    /// Focuses a tab.
    pub fn set_active_tab(&self, tab_id: &str) {
        self.state.write().tabs.set_active_tab(tab_id);
    }

    /// Shallow-merges a patch into a tab.
    pub fn update_tab(&self, tab_id: &str, patch: TabPatch) {
        self.state.write().tabs.update_tab(tab_id, patch);
    }

    /// Edits fields of a tab's request.
    pub fn update_request(&self, tab_id: &str, patch: RequestPatch) {
        self.state.write().tabs.update_request(tab_id, patch);
    }

    /// Sets one header on a tab's request.
    pub fn set_header(&self, tab_id: &str, key: &str, value: &str) {
        self.state.write().tabs.set_header(tab_id, key, value);
    }

    /// Removes one header from a tab's request.
    pub fn remove_header(&self, tab_id: &str, key: &str) {
        self.state.write().tabs.remove_header(tab_id, key);
    }

    /// Returns a tab by id.
    #[must_use]
    pub fn tab(&self, tab_id: &str) -> Option<Tab> {
        self.state.read().tabs.get(tab_id).cloned()
    }

    /// Returns the focused tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<Tab> {
        self.state.read().tabs.active_tab().cloned()
    }

    /// Returns all open tabs in insertion order.
    #[must_use]
    pub fn tabs(&self) -> Vec<Tab> {
        self.state.read().tabs.tabs().to_vec()
    }

    // Collections

    /// Starts a collection and makes it the save target.
    pub fn create_collection(&self, name: &str) {
        self.state.write().collections.create_collection(name);
    }

    /// Makes `name` the collection new requests are tagged with.
    pub fn set_active_collection(&self, name: &str) {
        self.state.write().collections.set_active_collection(name);
    }

    /// Renames a collection. Saved requests and open tabs carrying the old
    /// name are retagged in the same update.
    pub fn rename_collection(&self, old_name: &str, new_name: &str) {
        let mut state = self.state.write();
        if state.collections.rename_collection(old_name, new_name) {
            state.tabs.retag(old_name, new_name.trim());
        }
    }

    /// Saves a copy of a request into a collection. Open tabs are untouched.
    pub fn save_to_collection(&self, request: &Request, target: &str) -> Request {
        let saved = self
            .state
            .write()
            .collections
            .save_to_collection(request, target);
        debug!(request_id = %saved.id, collection = ?saved.collection, "saved request");
        saved
    }

    /// Saves a copy of a tab's current request. Unknown tabs save nothing.
    pub fn save_tab(&self, tab_id: &str, target: &str) -> Option<Request> {
        let mut state = self.state.write();
        let request = state.tabs.get(tab_id)?.request.clone();
        Some(state.collections.save_to_collection(&request, target))
    }

    /// Removes one saved request.
    pub fn delete_from_collection(&self, request_id: &str) {
        self.state
            .write()
            .collections
            .delete_from_collection(request_id);
    }

    /// Deletes a collection and its saved requests. Open tabs tagged with it
    /// lose the tag.
    pub fn delete_collection(&self, name: &str) {
        let mut state = self.state.write();
        if state.collections.delete_collection(name) {
            state.tabs.clear_tag(name.trim());
        }
    }

    /// Saved requests grouped by collection, computed on each call.
    #[must_use]
    pub fn grouped_collections(&self) -> GroupedCollections {
        self.state.read().collections.grouped()
    }

    /// Every known collection name, sorted.
    #[must_use]
    pub fn collection_names(&self) -> Vec<String> {
        self.state.read().collections.collection_names()
    }

    /// Returns the collection new requests are tagged with.
    #[must_use]
    pub fn active_collection(&self) -> String {
        self.state.read().collections.active_collection().to_string()
    }

    /// Returns every saved request.
    #[must_use]
    pub fn saved_requests(&self) -> Vec<Request> {
        self.state.read().collections.saved().to_vec()
    }

    /// Finds a saved request by id or name.
    #[must_use]
    pub fn find_saved(&self, id_or_name: &str) -> Option<Request> {
        self.state.read().collections.find(id_or_name).cloned()
    }

    // History

    /// Returns executed requests, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.read().history.entries().iter().cloned().collect()
    }

    // Execution

    /// Sends a tab's request against the active environment.
    ///
    /// Returns `None` (and does nothing) for an unknown tab. Otherwise the
    /// tab is marked loading, the request runs to completion, the response is
    /// written back with loading cleared, and the templated request is
    /// recorded in history.
    ///
    /// Callers should not send a tab that is already loading; the second
    /// response simply overwrites the first.
    pub async fn send(&self, tab_id: &str) -> Option<Response> {
        let (request, environment) = {
            let mut state = self.state.write();
            let request = state.tabs.get(tab_id)?.request.clone();
            state.tabs.update_tab(tab_id, TabPatch::loading());
            (request, state.environments.active().cloned())
        };

        let response = self.executor.execute(&request, environment.as_ref()).await;

        let mut state = self.state.write();
        state
            .tabs
            .update_tab(tab_id, TabPatch::completed(response.clone()));
        state.history.record(request, self.clock.now());
        drop(state);

        Some(response)
    }

    // Persistence

    /// Captures the persistent part of the workspace. Tabs are not included.
    #[must_use]
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let state = self.state.read();
        WorkspaceSnapshot {
            collections: state.collections.saved().to_vec(),
            active_collection: state.collections.active_collection().to_string(),
            environments: state.environments.environments().to_vec(),
            active_environment_id: state.environments.active_id().map(str::to_string),
            history: state.history.entries().iter().cloned().collect(),
        }
    }

    /// Replaces the persistent part of the workspace. Open tabs stay.
    pub fn restore(&self, snapshot: WorkspaceSnapshot) {
        let snapshot = snapshot.normalized();
        debug!(
            saved = snapshot.collections.len(),
            environments = snapshot.environments.len(),
            history = snapshot.history.len(),
            "restoring workspace"
        );

        let mut state = self.state.write();
        state.collections = CollectionManager::new(snapshot.collections, snapshot.active_collection);
        state.environments =
            EnvironmentStore::new(snapshot.environments, snapshot.active_environment_id);
        state.history = HistoryLog::from_entries(snapshot.history);
    }

    /// Restores from a store. Returns `false` if the store was empty.
    ///
    /// # Errors
    /// Returns the store's error if the snapshot cannot be read.
    pub async fn load_from(&self, store: &dyn SnapshotStore) -> ApplicationResult<bool> {
        match store.load().await? {
            Some(snapshot) => {
                self.restore(snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes the current snapshot to a store.
    ///
    /// # Errors
    /// Returns the store's error if the snapshot cannot be written.
    pub async fn save_to(&self, store: &dyn SnapshotStore) -> ApplicationResult<()> {
        let snapshot = self.snapshot();
        store.save(&snapshot).await
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}
