//! In-memory token store, the default backend and the test double.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::TokenPair;
use crate::errors::StoreError;
use crate::store::TokenStore;

/// Process-local token store
///
/// Holds the credential pair behind an `RwLock`, so clones share the same
/// session state. Suitable for single-process clients and as the store double
/// in tests; sessions do not survive a restart.
#[derive(Clone)]
pub struct MemoryTokenStore {
    pair: Arc<RwLock<Option<TokenPair>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            pair: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a store pre-populated with `pair`
    ///
    /// Useful for tests and for resuming a session whose credentials were
    /// obtained elsewhere.
    pub fn with_pair(pair: TokenPair) -> Self {
        Self {
            pair: Arc::new(RwLock::new(Some(pair))),
        }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<TokenPair>, StoreError> {
        Ok(self.pair.read().await.clone())
    }

    async fn put(&self, pair: TokenPair) -> Result<(), StoreError> {
        *self.pair.write().await = Some(pair);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.pair.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_none() {
        let store = MemoryTokenStore::new();
        assert!(store.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryTokenStore::new();
        let pair = TokenPair::new("A1", "R1");

        store.put(pair.clone()).await.unwrap();

        assert_eq!(store.get().await.unwrap(), Some(pair));
    }

    #[tokio::test]
    async fn test_put_replaces_whole_pair() {
        let store = MemoryTokenStore::with_pair(TokenPair::new("A1", "R1"));

        store.put(TokenPair::new("A2", "R2")).await.unwrap();

        let stored = store.get().await.unwrap().unwrap();
        assert_eq!(stored.access_token, "A2");
        assert_eq!(stored.refresh_token, "R2");
    }

    #[tokio::test]
    async fn test_clear_removes_pair() {
        let store = MemoryTokenStore::with_pair(TokenPair::new("A1", "R1"));

        store.clear().await.unwrap();

        assert!(store.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_on_empty_store_is_ok() {
        let store = MemoryTokenStore::new();
        assert!(store.clear().await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();

        store.put(TokenPair::new("A1", "R1")).await.unwrap();

        assert!(clone.get().await.unwrap().is_some());
    }
}
