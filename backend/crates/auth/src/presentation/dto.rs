//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::session_context::SessionState;
use crate::domain::entity::identity::PublicIdentity;

// ============================================================================
// Register / Login
// ============================================================================

/// Register and login share the same body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Public identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub email: String,
    pub id: String,
}

impl From<PublicIdentity> for IdentityResponse {
    fn from(identity: PublicIdentity) -> Self {
        Self {
            email: identity.email.into_inner(),
            id: identity.id.to_string(),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Session state response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<IdentityResponse>,
}

impl From<SessionState> for SessionResponse {
    fn from(state: SessionState) -> Self {
        Self {
            is_authenticated: state.is_authenticated(),
            is_loading: state.is_loading,
            user: state.current.map(IdentityResponse::from),
        }
    }
}
