//! # LaunchLab Core
//!
//! Core domain layer for the LaunchLab client SDK.
//! This crate contains the client-side session entities, the token storage
//! contract with its default in-memory implementation, and the domain error
//! types shared by every store backend.

pub mod domain;
pub mod errors;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use store::*;
