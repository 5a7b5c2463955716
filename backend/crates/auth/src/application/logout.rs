//! Logout Use Case
//!
//! There is no server-side session to revoke: the Session Store is left
//! untouched and clearing the active session is up to the session context.

use crate::domain::entity::identity::PublicIdentity;

/// Logout use case
#[derive(Debug, Default, Clone, Copy)]
pub struct LogoutUseCase;

impl LogoutUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, current: Option<&PublicIdentity>) {
        match current {
            Some(identity) => tracing::info!(id = %identity.id, "User logged out"),
            None => tracing::debug!("Logout without an active session"),
        }
    }
}
