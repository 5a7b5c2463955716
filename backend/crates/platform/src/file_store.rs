//! File-backed key-value backend
//!
//! Each key is stored as `<root>/<key>.json`. Writes land in a hidden temporary
//! sibling first and are renamed over the target, so a reader sees either the
//! previous snapshot or the new one in full.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::kv::{KeyValueStore, KvError, KvResult, validate_key};

#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// The root directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> KvResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    // Keys never start with '.', so this cannot collide with a real slot.
    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{key}.json.tmp"))
    }
}

fn io_error(key: &str, source: std::io::Error) -> KvError {
    KvError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let path = self.path_for(key)?;
        let tmp = self.temp_path_for(key);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error(key, e))?;
        tokio::fs::write(&tmp, value.as_bytes())
            .await
            .map_err(|e| io_error(key, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error(key, e))?;

        tracing::trace!(key, bytes = value.len(), "Stored key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
