//! Token store backends provided by the client crate.

mod file;

pub use file::FileTokenStore;
