//! Key-value backed result hand-off
//!
//! The pending report is stored as JSON under a single key. Taking it removes
//! the key, so each report is read at most once.

use std::sync::Arc;

use platform::KeyValueStore;
use tokio::sync::Mutex;

use crate::domain::entities::AnalysisReport;
use crate::domain::repository::ResultHandoff;
use crate::error::{AnalysisError, AnalysisResult};

pub struct KvResultHandoff<S> {
    kv: Arc<S>,
    key: String,
    // Serializes take() so two readers cannot both see the same report
    lock: Mutex<()>,
}

impl<S> KvResultHandoff<S>
where
    S: KeyValueStore + Sync,
{
    pub fn new(kv: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }
}

impl<S> ResultHandoff for KvResultHandoff<S>
where
    S: KeyValueStore + Sync,
{
    async fn put(&self, report: &AnalysisReport) -> AnalysisResult<()> {
        let raw = serde_json::to_string(report)
            .map_err(|e| AnalysisError::Internal(format!("encode report: {e}")))?;

        let _guard = self.lock.lock().await;
        self.kv.set(&self.key, &raw).await?;
        Ok(())
    }

    async fn take(&self) -> AnalysisResult<Option<AnalysisReport>> {
        let _guard = self.lock.lock().await;

        let Some(raw) = self.kv.get(&self.key).await? else {
            return Ok(None);
        };
        self.kv.remove(&self.key).await?;

        match serde_json::from_str(&raw) {
            Ok(report) => Ok(Some(report)),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed analysis result discarded");
                Ok(None)
            }
        }
    }
}
