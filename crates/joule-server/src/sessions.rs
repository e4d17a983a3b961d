//! In-memory session manager
//!
//! Maps session IDs to [`SessionState`] values from joule-core. States are
//! created on first touch and never persisted; restarting the server starts
//! everyone from an empty log.

use std::collections::HashMap;

use joule_core::SessionState;
use tokio::sync::RwLock;

/// Shared store of per-session state
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Run a closure against a session's state without mutating it
    ///
    /// An unknown session reads as an empty state rather than an error, so
    /// GET endpoints work before the first write.
    pub async fn read<R>(&self, session_id: &str, f: impl FnOnce(&SessionState) -> R) -> R {
        let sessions = self.sessions.read().await;
        match sessions.get(session_id) {
            Some(state) => f(state),
            None => f(&SessionState::new()),
        }
    }

    /// Run a closure against a session's state, creating it if needed
    pub async fn write<R>(&self, session_id: &str, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut sessions = self.sessions.write().await;
        f(sessions.entry(session_id.to_string()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use joule_core::{Appliance, EntryDraft, HousingType};

    fn entry(ac: f64) -> joule_core::Entry {
        EntryDraft::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            HousingType::Flat,
        )
        .with_usage(Appliance::Ac, ac)
        .build()
        .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_session_reads_empty() {
        let manager = SessionManager::new();
        let len = manager.read("nobody", |s| s.len()).await;
        assert_eq!(len, 0);
    }

    #[tokio::test]
    async fn test_write_creates_session() {
        let manager = SessionManager::new();
        manager.write("alice", |s| s.append(entry(2.0))).await;

        let len = manager.read("alice", |s| s.len()).await;
        assert_eq!(len, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let manager = SessionManager::new();
        manager.write("alice", |s| s.append(entry(2.0))).await;
        manager.write("bob", |s| s.append(entry(3.0))).await;
        manager.write("bob", |s| s.append(entry(1.0))).await;

        assert_eq!(manager.read("alice", |s| s.len()).await, 1);
        assert_eq!(manager.read("bob", |s| s.len()).await, 2);
    }
}
