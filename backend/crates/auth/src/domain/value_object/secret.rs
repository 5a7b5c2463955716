//! Secret Value Object
//!
//! The credential an identity registers with. It is compared as a plain
//! string, exactly like the rest of this simulated product; it never leaves
//! the identity store and is redacted from `Debug` output.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Create a secret for a new registration
    pub fn new(secret: impl Into<String>) -> AppResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AppError::bad_request("Password cannot be empty"));
        }
        Ok(Self(secret))
    }

    /// Rebuild from a stored value
    pub fn from_stored(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Plain, exact comparison against a candidate credential.
    // TODO: swap for a salted Argon2 hash before this store ever holds real accounts.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Raw value, for the storage layer only
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}
