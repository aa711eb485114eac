use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::ConversationState;

/// In-memory conversation state keyed by session id.
///
/// Each call takes the lock once and releases it before returning, so callers
/// never hold it across an `.await`. Entries live until removed; nothing is
/// evicted in the background.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, ConversationState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ConversationState>> {
        // Every write is a single insert or remove, so a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the session's state, inserting a fresh one if absent.
    pub fn get_or_create(&self, session_id: &str) -> ConversationState {
        self.lock()
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    pub fn get(&self, session_id: &str) -> Option<ConversationState> {
        self.lock().get(session_id).cloned()
    }

    pub fn put(&self, session_id: &str, state: ConversationState) {
        self.lock().insert(session_id.to_string(), state);
    }

    pub fn remove(&self, session_id: &str) -> Option<ConversationState> {
        self.lock().remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
