//! Session Context
//!
//! Process-wide facade over the auth use cases. Owns the in-memory answer to
//! "who is logged in" and mirrors it into the `user` storage slot so it
//! survives a restart.
//!
//! ## Lifecycle
//! - `new`: unauthenticated, `is_loading = true`
//! - `init`: restore the `user` slot (no credential check), `is_loading = false`
//! - `register` / `login`: on success become authenticated and persist
//! - `logout`: clear the session and erase the slot
//!
//! There is no expiry: a session lasts until logout or until the slot is
//! cleared externally.

use std::sync::Arc;

use platform::KeyValueStore;
use tokio::sync::RwLock;

use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::domain::entity::identity::PublicIdentity;
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;

/// Read-only view of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current: Option<PublicIdentity>,
    pub is_loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current: None,
            is_loading: true,
        }
    }
}

pub struct SessionContext<R, S> {
    identities: Arc<R>,
    kv: Arc<S>,
    config: Arc<AuthConfig>,
    state: RwLock<SessionState>,
}

impl<R, S> SessionContext<R, S>
where
    R: IdentityRepository + Sync,
    S: KeyValueStore + Sync,
{
    pub fn new(identities: Arc<R>, kv: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            identities,
            kv,
            config,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// `new` followed by `init`
    pub async fn restore(identities: Arc<R>, kv: Arc<S>, config: Arc<AuthConfig>) -> Self {
        let context = Self::new(identities, kv, config);
        context.init().await;
        context
    }

    /// Restore the active session from storage.
    ///
    /// Absent, unreadable or malformed slots leave the context
    /// unauthenticated. `is_loading` is cleared in every case.
    pub async fn init(&self) {
        let key = &self.config.session_key;
        let mut state = self.state.write().await;

        let restored = match self.kv.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str::<PublicIdentity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Malformed session slot, ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Session slot unreadable, ignoring");
                None
            }
        };

        if let Some(identity) = &restored {
            tracing::info!(id = %identity.id, "Session restored");
        }

        state.current = restored;
        state.is_loading = false;
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_identity(&self) -> Option<PublicIdentity> {
        self.state.read().await.current.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register and become the active session.
    ///
    /// On failure the active session is left as it was.
    pub async fn register(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<PublicIdentity> {
        let use_case = RegisterUseCase::new(self.identities.clone());
        let identity = use_case
            .execute(RegisterInput {
                email: email.into(),
                password: password.into(),
            })
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Registration failed"))?;

        self.activate(identity.clone()).await;
        Ok(identity)
    }

    /// Log in and become the active session.
    ///
    /// On failure the active session is left as it was.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<PublicIdentity> {
        let use_case = LoginUseCase::new(self.identities.clone());
        let identity = use_case
            .execute(LoginInput {
                email: email.into(),
                password: password.into(),
            })
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Login failed"))?;

        self.activate(identity.clone()).await;
        Ok(identity)
    }

    /// Clear the active session and erase its storage slot.
    pub async fn logout(&self) {
        // Held across the erase so the slot and memory change together
        let mut state = self.state.write().await;
        let previous = state.current.take();
        LogoutUseCase::new().execute(previous.as_ref());

        if let Err(e) = self.kv.remove(&self.config.session_key).await {
            tracing::warn!(error = %e, "Failed to erase session slot");
        }
    }

    async fn activate(&self, identity: PublicIdentity) {
        let mut state = self.state.write().await;

        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(e) = self.kv.set(&self.config.session_key, &raw).await {
                    tracing::warn!(error = %e, "Failed to persist session slot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to encode session slot"),
        }

        state.current = Some(identity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::infra::KvIdentityStore;
    use platform::MemoryKvStore;

    type Context = SessionContext<KvIdentityStore<MemoryKvStore>, MemoryKvStore>;

    async fn context(kv: &MemoryKvStore) -> Context {
        let config = Arc::new(AuthConfig::default());
        let kv = Arc::new(kv.clone());
        let identities = Arc::new(KvIdentityStore::load(kv.clone(), config.users_key.clone()).await);
        SessionContext::restore(identities, kv, config).await
    }

    #[tokio::test]
    async fn test_new_context_is_loading() {
        let kv = Arc::new(MemoryKvStore::new());
        let identities = Arc::new(KvIdentityStore::load(kv.clone(), "authUsers").await);
        let context = SessionContext::new(identities, kv, Arc::new(AuthConfig::default()));

        assert!(context.is_loading().await);
        context.init().await;
        assert!(!context.is_loading().await);
        assert!(!context.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_register_activates_and_persists() {
        let kv = MemoryKvStore::new();
        let context = context(&kv).await;

        let identity = context.register("a@x.com", "p1").await.unwrap();

        assert!(context.is_authenticated().await);
        assert_eq!(context.current_identity().await, Some(identity.clone()));

        let raw = kv.get("user").await.unwrap().unwrap();
        let stored: PublicIdentity = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, identity);
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.get("password").is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session() {
        let kv = MemoryKvStore::new();
        let context = context(&kv).await;
        let identity = context.register("a@x.com", "p1").await.unwrap();

        let err = context.login("a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(context.current_identity().await, Some(identity));
    }

    #[tokio::test]
    async fn test_failed_register_keeps_unauthenticated() {
        let kv = MemoryKvStore::new();
        let context = context(&kv).await;

        assert!(context.register("not-an-email", "p1").await.is_err());
        assert!(!context.is_authenticated().await);
        assert_eq!(kv.get("user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_restored_after_restart() {
        let kv = MemoryKvStore::new();
        let identity = context(&kv).await.register("a@x.com", "p1").await.unwrap();

        let restarted = context(&kv).await;
        let state = restarted.snapshot().await;
        assert!(!state.is_loading);
        assert_eq!(state.current, Some(identity));
    }

    #[tokio::test]
    async fn test_malformed_session_slot_is_ignored() {
        let kv = MemoryKvStore::new();
        kv.set("user", "not json").await.unwrap();

        let context = context(&kv).await;
        let state = context.snapshot().await;
        assert!(!state.is_loading);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_session_with_foreign_id_format_is_restored() {
        let kv = MemoryKvStore::new();
        kv.set("user", r#"{"email":"a@x.com","id":"k3j5h2l1m9q"}"#)
            .await
            .unwrap();

        let context = context(&kv).await;
        let current = context.current_identity().await.unwrap();
        assert_eq!(current.id.as_str(), "k3j5h2l1m9q");
    }

    /// Memory store whose `remove` is slow
    #[derive(Clone, Default)]
    struct SlowRemoveKv {
        inner: MemoryKvStore,
    }

    impl KeyValueStore for SlowRemoveKv {
        async fn get(&self, key: &str) -> platform::KvResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> platform::KvResult<()> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> platform::KvResult<()> {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn test_login_during_logout_keeps_slot_in_step() {
        let config = Arc::new(AuthConfig::default());
        let slots = SlowRemoveKv::default();
        let identities = Arc::new(
            KvIdentityStore::load(Arc::new(MemoryKvStore::new()), config.users_key.clone()).await,
        );
        let context = Arc::new(
            SessionContext::restore(identities, Arc::new(slots.clone()), config).await,
        );
        context.register("a@x.com", "p1").await.unwrap();

        let logout = tokio::spawn({
            let context = context.clone();
            async move { context.logout().await }
        });
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        context.login("a@x.com", "p1").await.unwrap();
        logout.await.unwrap();

        assert!(context.is_authenticated().await);
        let raw = slots.get("user").await.unwrap();
        assert!(raw.is_some(), "session slot must mirror the active identity");
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_slot() {
        let kv = MemoryKvStore::new();
        let context = context(&kv).await;
        context.register("a@x.com", "p1").await.unwrap();

        context.logout().await;

        assert!(!context.is_authenticated().await);
        assert_eq!(kv.get("user").await.unwrap(), None);
        // the identity itself is still registered
        assert!(context.login("a@x.com", "p1").await.is_ok());
    }
}
