use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{SessionError, SessionStore, SESSION_KEY};

/// Session storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a flag.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .insert(SESSION_KEY.to_string(), token.to_string());
        store
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(self.entries.lock().get(SESSION_KEY).cloned())
    }

    async fn write(&self, token: &str) -> Result<(), SessionError> {
        self.entries
            .lock()
            .insert(SESSION_KEY.to_string(), token.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_store_is_empty() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_then_read() {
        let store = MemorySessionStore::with_token("17");
        assert_eq!(store.read().await.unwrap().as_deref(), Some("17"));
        store.write("0").await.unwrap();
        assert_eq!(store.read().await.unwrap().as_deref(), Some("0"));
    }
}
