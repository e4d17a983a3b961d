//! Session store - the in-memory, per-session entry log

use crate::models::{Entry, UserProfile};

/// Ordered, session-scoped collection of entries plus the user profile
///
/// Insertion order is preserved. Duplicate dates accumulate as independent
/// entries; the aggregator sums them per date when it builds the daily
/// series. Nothing here survives the session.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    entries: Vec<Entry>,
    profile: Option<UserProfile>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the log
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Full history for the session, in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Drop all entries at session reset; the profile survives
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }
}
