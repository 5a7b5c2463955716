//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::AnalysisReport;

/// POST /analyze body
///
/// `platform` stays textual here so an unknown value surfaces as a 400 with
/// a readable message rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub account_id: String,
    pub platform: String,
}

/// Report plus the sentence describing its risk tier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub risk_summary: String,
}

impl From<AnalysisReport> for ReportResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            risk_summary: report.risk_level.summary().to_string(),
            report,
        }
    }
}
