//! Domain entities for the client-side session model.

pub mod entities;

pub use entities::token::TokenPair;
pub use entities::user::User;
