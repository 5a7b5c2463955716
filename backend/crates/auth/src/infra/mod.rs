//! Infrastructure Layer
//!
//! Storage-backed implementations of the domain repositories.

pub mod kv_identity_store;

pub use kv_identity_store::KvIdentityStore;
