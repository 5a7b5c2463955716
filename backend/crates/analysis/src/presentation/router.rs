//! Analysis Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::AnalysisConfig;
use crate::domain::repository::ResultHandoff;
use crate::domain::services::ReportGenerator;
use crate::presentation::handlers::{self, AnalysisAppState};

/// Create the Analysis router
pub fn analysis_router<G, H>(
    generator: Arc<G>,
    handoff: Arc<H>,
    config: Arc<AnalysisConfig>,
) -> Router
where
    G: ReportGenerator + 'static,
    H: ResultHandoff + Sync + 'static,
{
    Router::new()
        .route("/analyze", post(handlers::analyze::<G, H>))
        .route("/result", get(handlers::result::<G, H>))
        .with_state(AnalysisAppState::new(generator, handoff, config))
}
