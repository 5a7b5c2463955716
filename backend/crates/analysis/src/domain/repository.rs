//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::AnalysisReport;
use crate::error::AnalysisResult;

/// Single-slot hand-off from the analysis form to the results view
#[trait_variant::make(ResultHandoff: Send)]
pub trait LocalResultHandoff {
    /// Store `report`, replacing any report still pending
    async fn put(&self, report: &AnalysisReport) -> AnalysisResult<()>;

    /// Remove and return the pending report, if any
    async fn take(&self) -> AnalysisResult<Option<AnalysisReport>>;
}
