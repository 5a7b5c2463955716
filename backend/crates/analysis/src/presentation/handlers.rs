//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::{AnalysisConfig, AnalyzeInput, AnalyzeUseCase, TakeResultUseCase};
use crate::domain::repository::ResultHandoff;
use crate::domain::services::ReportGenerator;
use crate::domain::value_objects::Platform;
use crate::error::{AnalysisError, AnalysisResult};
use crate::presentation::dto::{AnalyzeRequest, ReportResponse};

/// Shared state for analysis handlers
pub struct AnalysisAppState<G, H>
where
    G: ReportGenerator,
    H: ResultHandoff,
{
    pub analyze: Arc<AnalyzeUseCase<G, H>>,
    pub take_result: Arc<TakeResultUseCase<H>>,
    pub config: Arc<AnalysisConfig>,
}

impl<G, H> AnalysisAppState<G, H>
where
    G: ReportGenerator,
    H: ResultHandoff + Sync,
{
    pub fn new(generator: Arc<G>, handoff: Arc<H>, config: Arc<AnalysisConfig>) -> Self {
        Self {
            analyze: Arc::new(AnalyzeUseCase::new(
                generator,
                handoff.clone(),
                config.clone(),
            )),
            take_result: Arc::new(TakeResultUseCase::new(handoff)),
            config,
        }
    }
}

impl<G, H> Clone for AnalysisAppState<G, H>
where
    G: ReportGenerator,
    H: ResultHandoff,
{
    fn clone(&self) -> Self {
        Self {
            analyze: self.analyze.clone(),
            take_result: self.take_result.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/analysis/analyze
pub async fn analyze<G, H>(
    State(state): State<AnalysisAppState<G, H>>,
    Json(req): Json<AnalyzeRequest>,
) -> AnalysisResult<Json<ReportResponse>>
where
    G: ReportGenerator + 'static,
    H: ResultHandoff + Sync + 'static,
{
    let platform: Platform = req.platform.parse()?;

    let report = state
        .analyze
        .execute(AnalyzeInput {
            account_id: req.account_id,
            platform,
        })
        .await?;

    Ok(Json(report.into()))
}

/// GET /api/analysis/result
pub async fn result<G, H>(
    State(state): State<AnalysisAppState<G, H>>,
) -> Result<Json<ReportResponse>, Response>
where
    G: ReportGenerator + 'static,
    H: ResultHandoff + Sync + 'static,
{
    match state.take_result.execute().await {
        Ok(report) => Ok(Json(report.into())),
        Err(AnalysisError::MissingAnalysisResult) => {
            tracing::debug!("No pending analysis result");
            Err(AnalysisError::MissingAnalysisResult
                .to_app_error()
                .with_action(state.config.entry_path.clone())
                .into_response())
        }
        Err(e) => Err(e.into_response()),
    }
}
