//! Platform Crate - Technical Infrastructure
//!
//! Durable key-value storage used by the auth and analysis contexts:
//! - [`kv::KeyValueStore`]: the `get` / `set` / `remove` interface
//! - [`memory_store::MemoryKvStore`]: process-local backend
//! - [`file_store::FileKvStore`]: one file per key under a root directory

pub mod file_store;
pub mod kv;
pub mod memory_store;

pub use file_store::FileKvStore;
pub use kv::{KeyValueStore, KvError, KvResult, LocalKeyValueStore};
pub use memory_store::MemoryKvStore;
