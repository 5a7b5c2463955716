//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Storage key holding every registered identity
    pub users_key: String,
    /// Storage key holding the current session's public identity
    pub session_key: String,
    /// Where unauthenticated clients are sent
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users_key: "authUsers".to_string(),
            session_key: "user".to_string(),
            login_path: "/login".to_string(),
        }
    }
}
