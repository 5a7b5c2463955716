//! Analyze Use Case
//!
//! Validates the request, waits out the simulated processing time, produces a
//! report and leaves it in the hand-off slot for the results view.

use std::sync::Arc;

use crate::application::config::AnalysisConfig;
use crate::domain::entities::AnalysisReport;
use crate::domain::repository::ResultHandoff;
use crate::domain::services::ReportGenerator;
use crate::domain::value_objects::{AccountId, Platform};
use crate::error::AnalysisResult;

/// Analyze input
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    pub account_id: String,
    pub platform: Platform,
}

pub struct AnalyzeUseCase<G, H>
where
    G: ReportGenerator,
    H: ResultHandoff,
{
    generator: Arc<G>,
    handoff: Arc<H>,
    config: Arc<AnalysisConfig>,
}

impl<G, H> AnalyzeUseCase<G, H>
where
    G: ReportGenerator,
    H: ResultHandoff + Sync,
{
    pub fn new(generator: Arc<G>, handoff: Arc<H>, config: Arc<AnalysisConfig>) -> Self {
        Self {
            generator,
            handoff,
            config,
        }
    }

    /// Produce a report without touching the hand-off slot.
    ///
    /// Validation happens before the latency, so a bad id fails immediately.
    pub async fn analyze(
        &self,
        account_id: &str,
        platform: Platform,
    ) -> AnalysisResult<AnalysisReport> {
        let account_id = AccountId::new(account_id)?;

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        Ok(self.generator.generate(&account_id, platform))
    }

    pub async fn execute(&self, input: AnalyzeInput) -> AnalysisResult<AnalysisReport> {
        let report = self.analyze(&input.account_id, input.platform).await?;

        self.handoff.put(&report).await?;

        tracing::info!(
            account_id = %report.account_id,
            platform = %report.platform,
            bot_percentage = report.bot_percentage,
            risk_level = %report.risk_level,
            "Analysis completed"
        );

        Ok(report)
    }
}
