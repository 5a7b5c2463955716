//! Key-Value Storage Interface
//!
//! Every durable slot of the application (registered identities, the current
//! session, the pending analysis result) is a textual value under a fixed key.

use thiserror::Error;

/// Key-value storage result type alias
pub type KvResult<T> = Result<T, KvError>;

/// Key-value storage errors
#[derive(Debug, Error)]
pub enum KvError {
    /// Key is empty or contains characters that are not allowed
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend I/O failure
    #[error("Storage I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Durable key-value store
///
/// Values are opaque text; callers own the serialization format.
/// `remove` on an absent key succeeds.
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> KvResult<()>;

    /// Erase the value stored under `key`
    async fn remove(&self, key: &str) -> KvResult<()>;
}

/// Check that a key is usable by every backend.
///
/// Allowed: ASCII alphanumerics, `_`, `-`, `.`; must not start with `.`.
pub fn validate_key(key: &str) -> KvResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(KvError::InvalidKey(key.to_string()))
    }
}
