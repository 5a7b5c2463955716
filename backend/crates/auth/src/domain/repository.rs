//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Session Store: the collection of registered identities
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Append a new identity and flush the whole collection.
    ///
    /// Fails with `DuplicateAccount` if the email is already registered.
    async fn add(&self, identity: Identity) -> AuthResult<()>;

    /// Exact, case-sensitive lookup
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>>;

    /// Number of registered identities
    async fn count(&self) -> AuthResult<usize>;
}
