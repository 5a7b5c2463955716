//! Auth Middleware
//!
//! Guards protected routes (dashboard, results). Unauthenticated requests are
//! turned away with 401 and pointed at the login entry point.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::KeyValueStore;

use crate::domain::repository::IdentityRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Header telling the client where to go instead
pub const REDIRECT_HEADER: &str = "x-redirect-to";

/// Middleware that requires an active session
pub async fn require_session<R, S>(
    State(state): State<AuthAppState<R, S>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    R: IdentityRepository + Sync + 'static,
    S: KeyValueStore + Sync + 'static,
{
    if state.context.is_authenticated().await {
        return next.run(req).await;
    }

    let login_path = state.context.config().login_path.clone();
    tracing::debug!(path = %req.uri().path(), "Rejected unauthenticated request");

    (
        StatusCode::UNAUTHORIZED,
        [(REDIRECT_HEADER, login_path.clone())],
        AuthError::NotAuthenticated
            .to_app_error()
            .with_action(login_path),
    )
        .into_response()
}
