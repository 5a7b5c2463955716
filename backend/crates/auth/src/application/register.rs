//! Register Use Case
//!
//! Creates a new identity.

use std::sync::Arc;

use crate::domain::entity::identity::{Identity, PublicIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{email::Email, secret::Secret};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: IdentityRepository,
{
    identities: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: IdentityRepository + Sync,
{
    pub fn new(identities: Arc<R>) -> Self {
        Self { identities }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<PublicIdentity> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;

        if self.identities.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateAccount);
        }

        let secret = Secret::new(input.password)
            .map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;

        let identity = Identity::new(email, secret);
        let public = identity.to_public();

        // Uniqueness is re-checked under the store's write lock
        self.identities.add(identity).await?;

        tracing::info!(id = %public.id, email = %public.email, "Account registered");

        Ok(public)
    }
}
