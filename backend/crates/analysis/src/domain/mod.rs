//! Domain Layer
//!
//! Contains entities, value objects, services, and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{AnalysisReport, SuspiciousAccount};
pub use repository::{LocalResultHandoff, ResultHandoff};
pub use services::{RandomReportGenerator, ReportGenerator};
pub use value_objects::{AccountId, Platform, RiskLevel};
