//! IdentityId Value Object
//!
//! Opaque identifier assigned to an identity when it registers.
//! New ids are Nanoids (21 URL-safe characters drawn from the OS RNG), but
//! stored ids are accepted in any non-empty format.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::identity_id::IdentityId;
//!
//! let id = IdentityId::new();
//! assert_eq!(id.as_str().len(), 21);
//! ```
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use nid::Nanoid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    #[inline]
    pub fn new() -> Self {
        let id: Nanoid = Nanoid::new();
        Self(id.to_string())
    }

    #[inline]
    pub fn parse_str(s: &str) -> AppResult<Self> {
        if s.is_empty() {
            return Err(AppError::bad_request("Identity id cannot be empty"));
        }
        Ok(Self(s.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IdentityId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        IdentityId::parse_str(s)
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
