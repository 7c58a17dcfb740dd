//! Typed endpoint operations built on the authenticated transport.

pub mod analytics;
pub mod auth;
pub mod dto;
