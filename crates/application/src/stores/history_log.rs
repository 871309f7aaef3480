//! History log
//!
//! Bounded, newest-first record of executed requests.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use nexus_domain::{HISTORY_LIMIT, HistoryEntry, Request};

/// Request history capped at [`HISTORY_LIMIT`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    /// History entries (newest first).
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history from entries already ordered newest first.
    #[must_use]
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    /// Records an executed request at the front, evicting the oldest entry
    /// once the limit is exceeded.
    pub fn record(&mut self, request: Request, timestamp: DateTime<Utc>) {
        self.entries.push_front(HistoryEntry::new(request, timestamp));
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Returns all entries (newest first).
    #[must_use]
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }
}
