//! Per-visitor session state: the chat log and a synthetic user id.
//!
//! Nothing here is persisted. A session lives in memory from the first page
//! load until it is evicted after `session_ttl_secs` of inactivity.

use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of user-id characters shown in the sidebar.
pub const USER_ID_DISPLAY_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    user_id: String,
    messages: Vec<ChatMessage>,
    last_seen: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user_id: generate_user_id(),
            messages: Vec::new(),
            last_seen: Instant::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// User id cut to [`USER_ID_DISPLAY_CHARS`] characters, followed by `...`.
    pub fn display_user_id(&self) -> String {
        let short: String = self.user_id.chars().take(USER_ID_DISPLAY_CHARS).collect();
        format!("{}...", short)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append one user/assistant exchange, user entry first.
    pub fn record_exchange(&mut self, prompt: &str, reply: &str) {
        self.messages.push(ChatMessage::user(prompt));
        self.messages.push(ChatMessage::assistant(reply));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Plain-text transcript, one `role: content` block per message.
    pub fn transcript(&self) -> String {
        let mut out = format!("Session {}\n\n", self.user_id);
        for msg in &self.messages {
            out.push_str(msg.role.as_str());
            out.push_str(": ");
            out.push_str(&msg.content);
            out.push_str("\n\n");
        }
        out
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamp-derived id, e.g. `user_1703261752.123456`.
pub fn generate_user_id() -> String {
    let now = Utc::now();
    format!("user_{}.{:06}", now.timestamp(), now.timestamp_subsec_micros())
}

/// All live sessions, keyed by the opaque cookie value.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Resolve `key` to a live session, creating a fresh one when the key is
    /// missing, unknown or expired. Returns the key to use, whether a new
    /// session was created, and the session itself.
    pub fn resolve(&mut self, key: Option<&str>) -> (String, bool, &mut Session) {
        self.evict_expired();

        let existing = key
            .filter(|k| self.sessions.contains_key(*k))
            .map(str::to_string);
        let (key, created) = match existing {
            Some(k) => (k, false),
            None => (uuid::Uuid::new_v4().to_string(), true),
        };

        let session = self.sessions.entry(key.clone()).or_default();
        session.touch();
        (key, created, session)
    }

    pub fn get(&self, key: &str) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Session> {
        self.sessions.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Session> {
        self.sessions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn evict_expired(&mut self) {
        let ttl = self.ttl;
        self.sessions.retain(|_, s| !s.is_expired(ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert!(session.messages().is_empty());
        assert!(session.user_id().starts_with("user_"));
        assert!(session.user_id().len() > "user_".len());
    }

    #[test]
    fn test_user_id_is_stable() {
        let session = Session::new();
        let first = session.user_id().to_string();
        assert_eq!(session.user_id(), first);
        assert_eq!(session.user_id(), first);
    }

    #[test]
    fn test_display_user_id_truncates() {
        let session = Session::new();
        let shown = session.display_user_id();
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), USER_ID_DISPLAY_CHARS + 3);
        assert!(session.user_id().starts_with(shown.trim_end_matches("...")));
    }

    #[test]
    fn test_record_exchange_order() {
        let mut session = Session::new();
        session.record_exchange("What is my balance?", "placeholder");

        let n = session.messages().len();
        session.record_exchange("X", "reply");

        let msgs = session.messages();
        assert_eq!(msgs.len(), n + 2);
        assert_eq!(msgs[n], ChatMessage::user("X"));
        assert_eq!(msgs[n + 1], ChatMessage::assistant("reply"));
    }

    #[test]
    fn test_clear_empties_log() {
        let mut session = Session::new();
        for i in 0..5 {
            session.record_exchange(&format!("q{}", i), "a");
        }
        session.clear();
        assert!(session.messages().is_empty());

        // Clearing an empty log is fine too
        session.clear();
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_transcript_contents() {
        let mut session = Session::new();
        session.record_exchange("Hello", "Hi there");
        let text = session.transcript();
        assert!(text.contains(session.user_id()));
        assert!(text.contains("user: Hello"));
        assert!(text.contains("assistant: Hi there"));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }

    #[test]
    fn test_store_creates_and_reuses() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let (key, created, _) = store.resolve(None);
        assert!(created);

        let (same, created, _) = store.resolve(Some(&key));
        assert!(!created);
        assert_eq!(same, key);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_unknown_key_gets_new_session() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let (key, created, session) = store.resolve(Some("not-a-session"));
        assert!(session.messages().is_empty());
        assert!(created);
        assert_ne!(key, "not-a-session");
    }

    #[test]
    fn test_store_sessions_are_isolated() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let (a, _, _) = store.resolve(None);
        let (b, _, _) = store.resolve(None);
        store.get_mut(&a).unwrap().record_exchange("only in a", "ok");

        assert_eq!(store.get(&a).unwrap().messages().len(), 2);
        assert!(store.get(&b).unwrap().messages().is_empty());
    }

    #[test]
    fn test_store_evicts_expired() {
        let mut store = SessionStore::new(Duration::ZERO);
        let (key, _, _) = store.resolve(None);
        std::thread::sleep(Duration::from_millis(5));

        let (next, created, _) = store.resolve(Some(&key));
        assert!(created);
        assert_ne!(next, key);
        assert!(store.get(&key).is_none());
    }

    #[test]
    fn test_store_remove() {
        let mut store = SessionStore::new(Duration::from_secs(60));
        let (key, _, _) = store.resolve(None);
        assert!(store.remove(&key).is_some());
        assert!(store.is_empty());
    }
}
