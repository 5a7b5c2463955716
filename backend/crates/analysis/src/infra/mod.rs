//! Infrastructure Layer
//!
//! Storage-backed implementation of the result hand-off.

pub mod kv_handoff;

pub use kv_handoff::KvResultHandoff;
