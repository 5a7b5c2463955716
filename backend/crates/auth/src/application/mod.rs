//! Application Layer
//!
//! Use cases and the process-wide session context.

pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod session_context;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use session_context::{SessionContext, SessionState};
