//! Key-value backed Session Store
//!
//! Identities live in memory for the lifetime of the process and the whole
//! collection is written back to a single key after every registration.

use std::sync::Arc;

use platform::KeyValueStore;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{email::Email, identity_id::IdentityId, secret::Secret};
use crate::error::{AuthError, AuthResult};

/// On-disk shape of one identity
#[derive(Debug, Serialize, Deserialize)]
struct StoredIdentity {
    email: String,
    password: String,
    id: IdentityId,
}

impl From<StoredIdentity> for Identity {
    fn from(row: StoredIdentity) -> Self {
        Identity::from_parts(
            row.id,
            Email::from_stored(row.email),
            Secret::from_stored(row.password),
        )
    }
}

impl From<&Identity> for StoredIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            email: identity.email.as_str().to_string(),
            password: identity.secret().expose().to_string(),
            id: identity.id.clone(),
        }
    }
}

pub struct KvIdentityStore<S> {
    kv: Arc<S>,
    key: String,
    identities: RwLock<Vec<Identity>>,
}

impl<S> KvIdentityStore<S>
where
    S: KeyValueStore + Sync,
{
    /// Load the collection from `key`.
    ///
    /// An absent slot yields an empty store. Unreadable or malformed content is
    /// logged and also yields an empty store; loading never fails.
    pub async fn load(kv: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();

        let identities = match kv.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(rows) => Self::decode_rows(&key, rows),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Malformed identity store, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Identity store unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::info!(key = %key, identities = identities.len(), "Identity store loaded");

        Self {
            kv,
            key,
            identities: RwLock::new(identities),
        }
    }

    /// Rows that do not decode are skipped one by one; the rest still load.
    fn decode_rows(key: &str, rows: Vec<serde_json::Value>) -> Vec<Identity> {
        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value::<StoredIdentity>(row) {
                Ok(row) => Some(Identity::from(row)),
                Err(e) => {
                    tracing::warn!(key = %key, index, error = %e, "Skipping malformed identity row");
                    None
                }
            })
            .collect()
    }

    /// Overwrite the durable snapshot. Failures are logged and swallowed:
    /// memory stays authoritative until the process exits.
    async fn flush(&self, identities: &[Identity]) {
        let rows: Vec<StoredIdentity> = identities.iter().map(StoredIdentity::from).collect();

        let raw = match serde_json::to_string(&rows) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to encode identity store");
                return;
            }
        };

        if let Err(e) = self.kv.set(&self.key, &raw).await {
            tracing::warn!(key = %self.key, error = %e, "Failed to flush identity store");
        }
    }
}

impl<S> IdentityRepository for KvIdentityStore<S>
where
    S: KeyValueStore + Sync,
{
    async fn add(&self, identity: Identity) -> AuthResult<()> {
        let mut identities = self.identities.write().await;

        if identities.iter().any(|i| i.email == identity.email) {
            return Err(AuthError::DuplicateAccount);
        }

        identities.push(identity);
        self.flush(&identities).await;
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| &i.email == email).cloned())
    }

    async fn count(&self) -> AuthResult<usize> {
        Ok(self.identities.read().await.len())
    }
}
