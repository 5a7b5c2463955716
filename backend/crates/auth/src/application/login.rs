//! Login Use Case
//!
//! Checks an email/password pair against the Session Store. Persisting the
//! resulting session is the session context's job.

use std::sync::Arc;

use crate::domain::entity::identity::PublicIdentity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: IdentityRepository,
{
    identities: Arc<R>,
}

impl<R> LoginUseCase<R>
where
    R: IdentityRepository + Sync,
{
    pub fn new(identities: Arc<R>) -> Self {
        Self { identities }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<PublicIdentity> {
        // A malformed address cannot match anything
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let identity = self
            .identities
            .find_by_email(&email)
            .await?
            .filter(|identity| identity.verify_secret(&input.password))
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(id = %identity.id, "User logged in");

        Ok(identity.to_public())
    }
}
