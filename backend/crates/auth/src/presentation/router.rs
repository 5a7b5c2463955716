//! Auth Router

use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use platform::KeyValueStore;
use std::sync::Arc;

use crate::application::session_context::SessionContext;
use crate::domain::repository::IdentityRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router
pub fn auth_router<R, S>(context: Arc<SessionContext<R, S>>) -> Router
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R, S>))
        .route("/login", post(handlers::login::<R, S>))
        .route("/logout", post(handlers::logout::<R, S>))
        .route("/session", get(handlers::session::<R, S>))
        .with_state(AuthAppState::new(context))
}

/// Put every route of `router` behind the session guard
pub fn protect<R, S>(router: Router, context: Arc<SessionContext<R, S>>) -> Router
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        AuthAppState::new(context),
        require_session::<R, S>,
    ))
}
