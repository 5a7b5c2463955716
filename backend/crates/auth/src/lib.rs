//! Auth (Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity entity, value objects, Session Store trait
//! - `application/` - Register / login / logout use cases and the session context
//! - `infra/` - Key-value backed Session Store
//! - `presentation/` - HTTP handlers, DTOs, router, session guard
//!
//! ## Model
//! - Identities are registered once and never change
//! - One active session per process, restored from storage at start-up
//! - Credentials are compared as plain strings (this is a simulated product)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, SessionContext, SessionState};
pub use domain::{Identity, PublicIdentity};
pub use error::{AuthError, AuthResult};
pub use infra::KvIdentityStore;
pub use presentation::{REDIRECT_HEADER, auth_router, protect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
