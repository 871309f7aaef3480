//! Collection naming and grouping types
//!
//! Collections are not stored on their own: a collection is the set of saved
//! requests sharing a tag.

use std::collections::BTreeMap;

use crate::request::Request;

/// Collection that always exists and cannot be deleted.
pub const DEFAULT_COLLECTION: &str = "Default";

/// Group key for saved requests without a collection tag.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Saved requests grouped by collection name, each group in saved order.
pub type GroupedCollections = BTreeMap<String, Vec<Request>>;

/// Returns the group key of a saved request.
#[must_use]
pub fn group_key(request: &Request) -> &str {
    request.collection.as_deref().unwrap_or(UNCATEGORIZED)
}
