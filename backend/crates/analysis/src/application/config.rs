//! Application Configuration
//!
//! Configuration for the Analysis application layer.

use std::time::Duration;

/// Analysis application configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Simulated processing time before a report is produced
    pub latency: Duration,
    /// Storage key of the pending-report slot
    pub result_key: String,
    /// Where clients are sent when no report is pending
    pub entry_path: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(2000),
            result_key: "analysisResult".to_string(),
            entry_path: "/dashboard".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// No simulated latency (for tests and development)
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Default::default()
        }
    }
}
