//! Application Layer
//!
//! Use cases for running an analysis and collecting its result.

pub mod analyze;
pub mod config;
pub mod take_result;

// Re-exports
pub use analyze::{AnalyzeInput, AnalyzeUseCase};
pub use config::AnalysisConfig;
pub use take_result::TakeResultUseCase;
