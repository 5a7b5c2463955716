//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use platform::KeyValueStore;
use std::sync::Arc;

use crate::application::session_context::SessionContext;
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{CredentialsRequest, IdentityResponse, SessionResponse};

/// Shared state for auth handlers and the session guard
pub struct AuthAppState<R, S> {
    pub context: Arc<SessionContext<R, S>>,
}

impl<R, S> AuthAppState<R, S> {
    pub fn new(context: Arc<SessionContext<R, S>>) -> Self {
        Self { context }
    }
}

// Manual impl: the state is cloneable whether or not R and S are.
impl<R, S> Clone for AuthAppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

/// POST /api/auth/register
pub async fn register<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<(StatusCode, Json<IdentityResponse>)>
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    let identity = state.context.register(req.email, req.password).await?;
    Ok((StatusCode::CREATED, Json(identity.into())))
}

/// POST /api/auth/login
pub async fn login<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<Json<IdentityResponse>>
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    let identity = state.context.login(req.email, req.password).await?;
    Ok(Json(identity.into()))
}

/// POST /api/auth/logout
pub async fn logout<R, S>(State(state): State<AuthAppState<R, S>>) -> StatusCode
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    state.context.logout().await;
    StatusCode::NO_CONTENT
}

/// GET /api/auth/session
pub async fn session<R, S>(State(state): State<AuthAppState<R, S>>) -> Json<SessionResponse>
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    Json(state.context.snapshot().await.into())
}
