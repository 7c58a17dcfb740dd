//! Token storage contract and the default in-memory implementation.

mod memory;

pub use memory::MemoryTokenStore;

use async_trait::async_trait;

use crate::domain::entities::token::TokenPair;
use crate::errors::StoreError;

/// Storage contract for the client-side credential pair
///
/// This trait is the persistence boundary of the SDK: the API client reads the
/// current pair before every request and overwrites it wholesale after a
/// successful login, registration, or refresh. Implementations must treat the
/// pair as a single unit - there is deliberately no per-field access, so a
/// torn pair (access token without its refresh token) cannot be observed.
///
/// Implementations must be cheap to call on every outgoing request.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the currently stored credential pair, if any
    ///
    /// # Returns
    /// * `Ok(Some(TokenPair))` - A pair is stored
    /// * `Ok(None)` - No session credentials are present
    /// * `Err(StoreError)` - The backend could not be read
    async fn get(&self) -> Result<Option<TokenPair>, StoreError>;

    /// Replaces the stored credential pair with `pair`
    ///
    /// Both fields are written together; on error the previously stored pair
    /// must remain intact.
    async fn put(&self, pair: TokenPair) -> Result<(), StoreError>;

    /// Removes the stored credential pair
    ///
    /// Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), StoreError>;
}
