//! Entity definitions persisted or exchanged by the client.

pub mod token;
pub mod user;
