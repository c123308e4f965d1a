//! In-memory login sessions.
//!
//! A session is a random token mapped to a username with an expiry. Expired
//! entries are dropped lazily when touched; there is no background sweeper,
//! the map stays small at this scale.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Cookie name carrying the session token.
pub const SESSION_COOKIE: &str = "aura_session";

#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(ttl_hours: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Create a session for a user and return its token.
    pub fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let session = Session {
            username: username.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions.write().unwrap().insert(token.clone(), session);
        token
    }

    /// Resolve a token to its username, dropping the session if expired.
    pub fn username_for(&self, token: &str) -> Option<String> {
        {
            let sessions = self.sessions.read().unwrap();
            match sessions.get(token) {
                Some(s) if !s.is_expired() => return Some(s.username.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: take the write lock to evict it.
        self.sessions.write().unwrap().remove(token);
        None
    }

    /// Remove a session (logout). Unknown tokens are a no-op.
    pub fn remove(&self, token: &str) {
        self.sessions.write().unwrap().remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let mgr = SessionManager::new(1);
        let token = mgr.create("sam");
        assert_eq!(mgr.username_for(&token).as_deref(), Some("sam"));
        assert_eq!(mgr.username_for("bogus"), None);
    }

    #[test]
    fn test_remove() {
        let mgr = SessionManager::new(1);
        let token = mgr.create("sam");
        mgr.remove(&token);
        assert_eq!(mgr.username_for(&token), None);
        // Removing again is harmless
        mgr.remove(&token);
    }

    #[test]
    fn test_expired_session_is_evicted() {
        let mgr = SessionManager::new(0);
        let token = mgr.create("sam");
        // ttl of zero hours expires immediately
        assert_eq!(mgr.username_for(&token), None);
        assert!(mgr.sessions.read().unwrap().is_empty());
    }

    #[test]
    fn test_tokens_are_unique() {
        let mgr = SessionManager::new(1);
        assert_ne!(mgr.create("a"), mgr.create("a"));
    }
}
