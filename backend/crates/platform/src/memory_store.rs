//! In-memory key-value backend
//!
//! Lives as long as the process. Clones share the same map, so a clone can
//! stand in for "the same storage seen after a restart" in tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::kv::{KeyValueStore, KvResult, validate_key};

#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        validate_key(key)?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}
