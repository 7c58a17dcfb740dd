//! Session credential entities.

use serde::{Deserialize, Serialize};

/// The credential pair held by an authenticated client session.
///
/// The access token is a short-lived bearer credential attached to every
/// authenticated request; the refresh token is a longer-lived credential
/// exchanged for a new pair once the server rejects the access token.
///
/// The two values always travel together: a pair is created, stored, and
/// cleared as a unit, never one field at a time. Expiry is not tracked
/// client-side; the server signals an expired access token with a 401.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer credential
    pub access_token: String,

    /// Longer-lived credential exchanged for a fresh pair
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new credential pair
    ///
    /// # Arguments
    ///
    /// * `access_token` - The bearer credential for authenticated requests
    /// * `refresh_token` - The credential used to obtain a replacement pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

// Credentials must not leak into logs; Debug shows masked values only.
impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &mask_token(&self.access_token))
            .field("refresh_token", &mask_token(&self.refresh_token))
            .finish()
    }
}

/// Masks a credential value for logging, keeping only a short prefix
///
/// # Arguments
///
/// * `token` - The credential value to mask
///
/// # Returns
///
/// A masked representation safe to include in log output
pub fn mask_token(token: &str) -> String {
    // Slice on a char boundary; tokens are not guaranteed to be ASCII.
    match token.char_indices().nth(4) {
        Some((boundary, _)) => format!("{}****", &token[..boundary]),
        None => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new("access-abc", "refresh-xyz");

        assert_eq!(pair.access_token, "access-abc");
        assert_eq!(pair.refresh_token, "refresh-xyz");
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("access-abc", "refresh-xyz");

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();

        assert_eq!(pair, deserialized);
    }

    #[test]
    fn test_debug_masks_credentials() {
        let pair = TokenPair::new("secret-access-token", "secret-refresh-token");
        let rendered = format!("{:?}", pair);

        assert!(!rendered.contains("secret-access-token"));
        assert!(!rendered.contains("secret-refresh-token"));
        assert!(rendered.contains("secr****"));
    }

    #[test]
    fn test_mask_token_short_values() {
        assert_eq!(mask_token(""), "****");
        assert_eq!(mask_token("abcd"), "****");
        assert_eq!(mask_token("abcde"), "abcd****");
    }

    #[test]
    fn test_mask_token_multibyte_values() {
        // Four chars keep the whole-mask form even when longer in bytes.
        assert_eq!(mask_token("ключ"), "****");
        // The kept prefix is four characters, not four bytes.
        assert_eq!(mask_token("секрет"), "секр****");
        assert_eq!(mask_token("ab🔑cdef"), "ab🔑c****");
    }
}
