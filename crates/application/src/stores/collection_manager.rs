//! Collection manager
//!
//! Saved requests and the collections derived from their tags. There is no
//! collection table: a name exists while some saved request carries it, or
//! while it is the active collection.

use std::collections::BTreeSet;

use nexus_domain::collection::group_key;
use nexus_domain::{DEFAULT_COLLECTION, GroupedCollections, Request};
use tracing::debug;

/// Saved requests plus the collection new requests are saved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionManager {
    saved: Vec<Request>,
    active_collection: String,
}

impl CollectionManager {
    /// Creates a manager from saved requests and an active collection.
    #[must_use]
    pub fn new(saved: Vec<Request>, active_collection: impl Into<String>) -> Self {
        let active_collection = active_collection.into();
        let active_collection = if active_collection.trim().is_empty() {
            DEFAULT_COLLECTION.to_string()
        } else {
            active_collection
        };
        Self {
            saved,
            active_collection,
        }
    }

    /// Starts a new, empty collection and makes it the save target.
    ///
    /// Blank names are ignored.
    pub fn create_collection(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        debug!(collection = name, "creating collection");
        self.active_collection = name.to_string();
    }

    /// Points new requests at an existing or new collection name.
    pub fn set_active_collection(&mut self, name: &str) {
        self.create_collection(name);
    }

    /// Renames a collection, retagging every saved request in it.
    ///
    /// Returns `false` (and changes nothing) when `new_name` is blank or
    /// equal to `old_name`. Renaming onto an existing name merges the two.
    pub fn rename_collection(&mut self, old_name: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name {
            return false;
        }

        debug!(from = old_name, to = new_name, "renaming collection");
        for request in &mut self.saved {
            if request.collection.as_deref() == Some(old_name) {
                request.collection = Some(new_name.to_string());
            }
        }
        if self.active_collection == old_name {
            self.active_collection = new_name.to_string();
        }
        true
    }

    /// Saves a copy of `request` into `target`.
    ///
    /// A blank target means the active collection. A saved request with the
    /// same id is replaced in place. Returns the saved copy.
    pub fn save_to_collection(&mut self, request: &Request, target: &str) -> Request {
        let target = match target.trim() {
            "" => self.active_collection.clone(),
            name => name.to_string(),
        };

        let mut saved = request.clone();
        saved.collection = Some(target);

        if let Some(existing) = self.saved.iter_mut().find(|r| r.id == saved.id) {
            existing.clone_from(&saved);
        } else {
            self.saved.push(saved.clone());
        }
        saved
    }

    /// Removes one saved request.
    pub fn delete_from_collection(&mut self, request_id: &str) {
        self.saved.retain(|r| r.id != request_id);
    }

    /// Deletes a collection and every saved request in it.
    ///
    /// The default collection cannot be deleted. If the deleted collection was
    /// active, another existing collection becomes active, or the default.
    /// Returns `false` when the name is blank or the default collection, so
    /// callers know not to drop the tag elsewhere.
    pub fn delete_collection(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == DEFAULT_COLLECTION {
            return false;
        }

        let before = self.saved.len();
        self.saved.retain(|r| r.collection.as_deref() != Some(name));
        let removed = before - self.saved.len();
        debug!(collection = name, removed, "deleting collection");

        if self.active_collection == name {
            let next = self
                .tags()
                .into_iter()
                .next()
                .unwrap_or(DEFAULT_COLLECTION)
                .to_string();
            self.active_collection = next;
        }
        true
    }

    /// Groups saved requests by collection, recomputed on every call.
    ///
    /// Untagged requests are grouped under `"Uncategorized"`.
    #[must_use]
    pub fn grouped(&self) -> GroupedCollections {
        let mut groups = GroupedCollections::new();
        for request in &self.saved {
            groups
                .entry(group_key(request).to_string())
                .or_default()
                .push(request.clone());
        }
        groups
    }

    /// Every collection name: the tags in use plus the active collection.
    #[must_use]
    pub fn collection_names(&self) -> Vec<String> {
        let mut names = self.tags();
        names.insert(self.active_collection.as_str());
        names.into_iter().map(str::to_string).collect()
    }

    /// Returns the save target for new requests.
    #[must_use]
    pub fn active_collection(&self) -> &str {
        &self.active_collection
    }

    /// Returns all saved requests in saved order.
    #[must_use]
    pub fn saved(&self) -> &[Request] {
        &self.saved
    }

    /// Finds a saved request by id, or else by name.
    #[must_use]
    pub fn find(&self, id_or_name: &str) -> Option<&Request> {
        self.saved
            .iter()
            .find(|r| r.id == id_or_name)
            .or_else(|| self.saved.iter().find(|r| r.name == id_or_name))
    }

    fn tags(&self) -> BTreeSet<&str> {
        self.saved
            .iter()
            .filter_map(|r| r.collection.as_deref())
            .collect()
    }
}

impl Default for CollectionManager {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_COLLECTION)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_tagged(manager: &CollectionManager, name: &str) -> usize {
        manager
            .saved()
            .iter()
            .filter(|r| r.collection.as_deref() == Some(name))
            .count()
    }

    #[test]
    fn test_create_collection_sets_active() {
        let mut manager = CollectionManager::default();
        manager.create_collection("  Smoke  ");
        assert_eq!(manager.active_collection(), "Smoke");

        manager.create_collection("   ");
        assert_eq!(manager.active_collection(), "Smoke");
        assert_eq!(manager.collection_names(), vec!["Smoke".to_string()]);
    }

    #[test]
    fn test_save_copies_and_tags() {
        let mut manager = CollectionManager::default();
        let request = Request::get("Ping", "/ping");

        let saved = manager.save_to_collection(&request, "Smoke");

        assert_eq!(saved.id, request.id);
        assert_eq!(saved.collection.as_deref(), Some("Smoke"));
        assert_eq!(request.collection, None);
        assert_eq!(manager.saved().len(), 1);
    }

    #[test]
    fn test_save_same_id_replaces() {
        let mut manager = CollectionManager::default();
        let mut request = Request::get("Ping", "/ping");
        manager.save_to_collection(&request, "Smoke");

        request.url = "/pong".to_string();
        manager.save_to_collection(&request, "Smoke");

        assert_eq!(manager.saved().len(), 1);
        assert_eq!(manager.saved()[0].url, "/pong");
    }

    #[test]
    fn test_save_blank_target_uses_active() {
        let mut manager = CollectionManager::default();
        let saved = manager.save_to_collection(&Request::new("x"), " ");
        assert_eq!(saved.collection.as_deref(), Some("Default"));
    }

    #[test]
    fn test_rename_retags_all() {
        let mut manager = CollectionManager::default();
        for i in 0..3 {
            manager.save_to_collection(&Request::new(format!("a{i}")), "A");
        }
        manager.save_to_collection(&Request::new("b"), "B");
        manager.set_active_collection("A");

        assert!(manager.rename_collection("A", "C"));

        assert_eq!(count_tagged(&manager, "A"), 0);
        assert_eq!(count_tagged(&manager, "C"), 3);
        assert_eq!(count_tagged(&manager, "B"), 1);
        assert_eq!(manager.active_collection(), "C");
    }

    #[test]
    fn test_rename_with_no_requests() {
        let mut manager = CollectionManager::default();
        assert!(manager.rename_collection("Empty", "Still Empty"));
        assert_eq!(count_tagged(&manager, "Still Empty"), 0);
        assert_eq!(manager.active_collection(), "Default");
    }

    #[test]
    fn test_rename_blank_or_same_is_noop() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("a"), "A");
        let before = manager.clone();

        assert!(!manager.rename_collection("A", "  "));
        assert!(!manager.rename_collection("A", "A"));
        assert_eq!(manager, before);
    }

    #[test]
    fn test_rename_onto_existing_merges() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("a"), "A");
        manager.save_to_collection(&Request::new("b"), "B");

        manager.rename_collection("A", "B");

        assert_eq!(manager.grouped()["B"].len(), 2);
    }

    #[test]
    fn test_delete_collection_scenario() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("keep"), "Default");
        manager.create_collection("Smoke");
        manager.save_to_collection(&Request::new("one"), "Smoke");
        manager.save_to_collection(&Request::new("two"), "Smoke");
        let before = manager.saved().len();

        assert!(manager.delete_collection("Smoke"));

        assert!(!manager.grouped().contains_key("Smoke"));
        assert_eq!(manager.saved().len(), before - 2);
        assert_eq!(manager.active_collection(), "Default");
    }

    #[test]
    fn test_delete_active_moves_to_other_collection() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("a"), "Alpha");
        manager.save_to_collection(&Request::new("s"), "Smoke");
        manager.set_active_collection("Smoke");

        manager.delete_collection("Smoke");

        assert_eq!(manager.active_collection(), "Alpha");
    }

    #[test]
    fn test_default_collection_is_not_deletable() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("a"), "Default");
        assert!(!manager.delete_collection("Default"));
        assert_eq!(manager.saved().len(), 1);
    }

    #[test]
    fn test_delete_collection_trims_name() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("s"), "Smoke");
        manager.set_active_collection("Smoke");

        assert!(manager.delete_collection(" Smoke "));

        assert_eq!(manager.saved().len(), 0);
        assert_eq!(manager.active_collection(), "Default");
        assert!(!manager.delete_collection("   "));
        assert!(!manager.delete_collection(" Default "));
    }

    #[test]
    fn test_delete_empty_inactive_collection_is_allowed() {
        let mut manager = CollectionManager::default();
        manager.save_to_collection(&Request::new("a"), "Alpha");

        assert!(manager.delete_collection("Ghost"));

        assert_eq!(manager.saved().len(), 1);
        assert_eq!(manager.active_collection(), "Default");
    }

    #[test]
    fn test_delete_from_collection() {
        let mut manager = CollectionManager::default();
        let saved = manager.save_to_collection(&Request::new("a"), "A");
        manager.save_to_collection(&Request::new("b"), "A");

        manager.delete_from_collection(&saved.id);
        manager.delete_from_collection("unknown");

        assert_eq!(manager.saved().len(), 1);
        assert_eq!(manager.saved()[0].name, "b");
    }

    #[test]
    fn test_grouped_view() {
        let mut manager = CollectionManager::new(
            vec![Request::new("loose"), Request::new("x").in_collection("Zeta")],
            "Default",
        );
        manager.save_to_collection(&Request::new("first"), "Alpha");
        manager.save_to_collection(&Request::new("second"), "Alpha");

        let grouped = manager.grouped();
        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Alpha", "Uncategorized", "Zeta"]);
        let names: Vec<&str> = grouped["Alpha"].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_find_by_id_or_name() {
        let mut manager = CollectionManager::default();
        let saved = manager.save_to_collection(&Request::new("Ping"), "A");
        assert_eq!(manager.find(&saved.id).map(|r| r.name.as_str()), Some("Ping"));
        assert_eq!(manager.find("Ping").map(|r| r.id.clone()), Some(saved.id));
        assert!(manager.find("nope").is_none());
    }
}
