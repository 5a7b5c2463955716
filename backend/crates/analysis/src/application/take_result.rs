//! Take Result Use Case
//!
//! Hands the pending report to the results view exactly once.

use std::sync::Arc;

use crate::domain::entities::AnalysisReport;
use crate::domain::repository::ResultHandoff;
use crate::error::{AnalysisError, AnalysisResult};

pub struct TakeResultUseCase<H>
where
    H: ResultHandoff,
{
    handoff: Arc<H>,
}

impl<H> TakeResultUseCase<H>
where
    H: ResultHandoff + Sync,
{
    pub fn new(handoff: Arc<H>) -> Self {
        Self { handoff }
    }

    pub async fn execute(&self) -> AnalysisResult<AnalysisReport> {
        match self.handoff.take().await? {
            Some(report) => {
                tracing::debug!(account_id = %report.account_id, "Analysis result taken");
                Ok(report)
            }
            None => Err(AnalysisError::MissingAnalysisResult),
        }
    }
}
