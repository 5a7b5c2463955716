//! Analysis Error Types
//!
//! Analysis-specific error variants mapped onto `kernel::error::AppError`.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::KvError;
use thiserror::Error;

/// Analysis-specific result type alias
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Account id was empty or whitespace
    #[error("Account id must not be empty")]
    InvalidAccountId,

    /// Platform outside the supported set
    #[error("Unsupported platform: {0}")]
    InvalidPlatform(String),

    /// Results were requested with nothing pending
    #[error("No analysis result available")]
    MissingAnalysisResult,

    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidAccountId | AnalysisError::InvalidPlatform(_) => {
                ErrorKind::BadRequest
            }
            AnalysisError::MissingAnalysisResult => ErrorKind::NotFound,
            AnalysisError::Storage(_) | AnalysisError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Storage details stay in the logs
            AnalysisError::Storage(_) => AppError::internal("Storage error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AnalysisError::Storage(e) => {
                tracing::error!(error = %e, "Analysis storage error");
            }
            AnalysisError::Internal(msg) => {
                tracing::error!(message = %msg, "Analysis internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Analysis error");
            }
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
