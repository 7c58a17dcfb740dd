//! # LaunchLab Client
//!
//! HTTP client for the LaunchLab platform API. Wraps outgoing requests with
//! bearer-token attachment, recovers exactly once from an expired access
//! token by exchanging the stored refresh credential, and exposes typed
//! operations for the auth and analytics endpoints.
//!
//! ## Architecture
//!
//! - **http**: the authenticated transport with the single-shot
//!   refresh-on-401 policy
//! - **api**: typed endpoint operations and their wire DTOs
//! - **config**: environment selection and client configuration
//! - **store**: the file-backed [`ll_core::TokenStore`] implementation
//!
//! Token storage is injected at construction; see [`ll_core::TokenStore`]
//! for the contract and `ll_core::MemoryTokenStore` for the default backend.

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod store;

pub use config::{ClientConfig, Environment};
pub use errors::ClientError;
pub use http::ApiClient;
pub use store::FileTokenStore;

// Re-export the domain types callers interact with
pub use ll_core::{MemoryTokenStore, StoreError, TokenPair, TokenStore, User};
