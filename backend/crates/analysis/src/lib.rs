//! Analysis (Bot Detection) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Report entities, risk rules, the report generator, hand-off trait
//! - `application/` - Analyze and take-result use cases
//! - `infra/` - Key-value backed result hand-off
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - Reports are synthetic: every figure is drawn at random
//! - `bot_percentage` and `risk_level` are derived, never supplied
//! - A report is handed to the results view once, then the slot is empty

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AnalysisConfig, AnalyzeInput, AnalyzeUseCase, TakeResultUseCase};
pub use domain::{
    AccountId, AnalysisReport, Platform, RandomReportGenerator, ReportGenerator, RiskLevel,
    SuspiciousAccount,
};
pub use error::{AnalysisError, AnalysisResult};
pub use infra::KvResultHandoff;
pub use presentation::analysis_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
