//! Tab store
//!
//! The ordered list of open tabs and the focused one.

use nexus_domain::{Request, RequestPatch, Tab, TabPatch};
use tracing::debug;

/// Open tabs in insertion order, plus the active tab id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new tab and makes it active. Returns the tab id.
    ///
    /// The request starts from the defaults (fresh id, "Untitled Request",
    /// GET, empty URL, headers and body) tagged with `active_collection`;
    /// any field in `partial` overrides the default.
    pub fn add_tab(&mut self, partial: Option<RequestPatch>, active_collection: &str) -> String {
        let defaults = Request::default().in_collection(active_collection);
        let request = match partial {
            Some(patch) => patch.into_request(defaults),
            None => defaults,
        };

        let tab = Tab::new(request);
        let id = tab.id.clone();
        debug!(tab_id = %id, "opening tab");

        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        id
    }

    /// Closes a tab.
    ///
    /// Closing the active tab activates the last remaining tab, or none.
    pub fn close_tab(&mut self, tab_id: &str) {
        let Some(index) = self.position(tab_id) else {
            return;
        };
        self.tabs.remove(index);

        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.last().map(|t| t.id.clone());
        }
    }

    /// Focuses a tab. Unknown ids are ignored.
    pub fn set_active_tab(&mut self, tab_id: &str) {
        if self.position(tab_id).is_some() {
            self.active_tab_id = Some(tab_id.to_string());
        }
    }

    /// Shallow-merges a patch into a tab.
    pub fn update_tab(&mut self, tab_id: &str, patch: TabPatch) {
        if let Some(tab) = self.get_mut(tab_id) {
            tab.apply(patch);
        }
    }

    /// Shallow-merges field edits into a tab's request.
    pub fn update_request(&mut self, tab_id: &str, patch: RequestPatch) {
        if let Some(tab) = self.get_mut(tab_id) {
            patch.apply_to(&mut tab.request);
        }
    }

    /// Sets one header on a tab's request.
    pub fn set_header(&mut self, tab_id: &str, key: &str, value: &str) {
        if key.trim().is_empty() {
            return;
        }
        if let Some(tab) = self.get_mut(tab_id) {
            tab.request.headers.insert(key.to_string(), value.to_string());
        }
    }

    /// Removes one header from a tab's request.
    pub fn remove_header(&mut self, tab_id: &str, key: &str) {
        if let Some(tab) = self.get_mut(tab_id) {
            tab.request.headers.remove(key);
        }
    }

    /// Moves every tab tagged `old` to `new`.
    pub fn retag(&mut self, old: &str, new: &str) {
        for tab in &mut self.tabs {
            if tab.request.collection.as_deref() == Some(old) {
                tab.request.collection = Some(new.to_string());
            }
        }
    }

    /// Removes the tag `name` from every tab carrying it.
    pub fn clear_tag(&mut self, name: &str) {
        for tab in &mut self.tabs {
            if tab.request.collection.as_deref() == Some(name) {
                tab.request.collection = None;
            }
        }
    }

    /// Returns a tab by id.
    #[must_use]
    pub fn get(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    /// Returns the active tab, if any.
    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.as_deref().and_then(|id| self.get(id))
    }

    /// Returns the active tab id.
    #[must_use]
    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Returns all tabs in insertion order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn get_mut(&mut self, tab_id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }
}
