//! Identity Entity
//!
//! One registered account. Created by registration, never mutated and never
//! deleted.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, identity_id::IdentityId, secret::Secret};

#[derive(Debug, Clone)]
pub struct Identity {
    /// Generated at creation, immutable
    pub id: IdentityId,
    /// Unique across the store
    pub email: Email,
    secret: Secret,
}

impl Identity {
    /// Create a new identity with a fresh id
    pub fn new(email: Email, secret: Secret) -> Self {
        Self {
            id: IdentityId::new(),
            email,
            secret,
        }
    }

    /// Rebuild an identity read back from storage
    pub fn from_parts(id: IdentityId, email: Email, secret: Secret) -> Self {
        Self { id, email, secret }
    }

    /// Whether `candidate` is this identity's credential
    pub fn verify_secret(&self, candidate: &str) -> bool {
        self.secret.matches(candidate)
    }

    pub(crate) fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Projection without the credential
    pub fn to_public(&self) -> PublicIdentity {
        PublicIdentity {
            email: self.email.clone(),
            id: self.id.clone(),
        }
    }
}

/// Public projection of an [`Identity`]
///
/// This is what the session holds and what the `user` slot stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIdentity {
    pub email: Email,
    pub id: IdentityId,
}
