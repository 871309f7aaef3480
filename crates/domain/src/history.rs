//! Request History Domain Model
//!
//! Defines the structure for tracking executed requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::Request;

/// Maximum number of history entries kept; older entries are evicted first.
pub const HISTORY_LIMIT: usize = 50;

/// A single entry in the request history.
///
/// Stores the request as it was templated, never the resolved values.
/// On disk the request fields sit next to `timestamp` (epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot of the executed request.
    #[serde(flatten)]
    pub request: Request,
    /// When the request was executed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates a history entry for a request executed at `timestamp`.
    #[must_use]
    pub const fn new(request: Request, timestamp: DateTime<Utc>) -> Self {
        Self { request, timestamp }
    }

    /// Label for lists: the URL template, or the request name when the URL is empty.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.request.url.is_empty() {
            &self.request.name
        } else {
            &self.request.url
        }
    }
}
