//! Scenario tests for the analysis crate

#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use platform::MemoryKvStore;

    use crate::application::{AnalysisConfig, AnalyzeInput, AnalyzeUseCase, TakeResultUseCase};
    use crate::domain::entities::AnalysisReport;
    use crate::domain::services::{RandomReportGenerator, ReportGenerator};
    use crate::domain::value_objects::{AccountId, Platform, RiskLevel};
    use crate::error::AnalysisError;
    use crate::infra::KvResultHandoff;

    type Handoff = KvResultHandoff<MemoryKvStore>;

    /// Fixed 2000/600 report; counts calls
    #[derive(Default)]
    struct FixedGenerator {
        calls: AtomicUsize,
    }

    impl ReportGenerator for FixedGenerator {
        fn generate(&self, account_id: &AccountId, platform: Platform) -> AnalysisReport {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AnalysisReport::new(account_id.clone(), platform, 2000, 600, Vec::new())
        }
    }

    fn use_cases<G: ReportGenerator>(
        generator: Arc<G>,
        config: AnalysisConfig,
    ) -> (AnalyzeUseCase<G, Handoff>, TakeResultUseCase<Handoff>) {
        let config = Arc::new(config);
        let handoff = Arc::new(KvResultHandoff::new(
            Arc::new(MemoryKvStore::new()),
            config.result_key.clone(),
        ));
        (
            AnalyzeUseCase::new(generator, handoff.clone(), config),
            TakeResultUseCase::new(handoff),
        )
    }

    fn input(account_id: &str, platform: Platform) -> AnalyzeInput {
        AnalyzeInput {
            account_id: account_id.to_string(),
            platform,
        }
    }

    #[tokio::test]
    async fn test_analyze_then_take() {
        let generator = Arc::new(FixedGenerator::default());
        let (analyze, take) = use_cases(generator.clone(), AnalysisConfig::immediate());

        let report = analyze
            .execute(input("user123", Platform::Instagram))
            .await
            .unwrap();
        assert_eq!(report.account_id.as_str(), "user123");
        assert_eq!(report.bot_percentage, 30.0);
        assert_eq!(report.risk_level, RiskLevel::Medium);

        assert_eq!(take.execute().await.unwrap(), report);
        assert!(matches!(
            take.execute().await.unwrap_err(),
            AnalysisError::MissingAnalysisResult
        ));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_take_without_analysis() {
        let (_, take) = use_cases(Arc::new(FixedGenerator::default()), AnalysisConfig::immediate());
        assert!(matches!(
            take.execute().await.unwrap_err(),
            AnalysisError::MissingAnalysisResult
        ));
    }

    #[tokio::test]
    async fn test_second_analysis_replaces_first() {
        let (analyze, take) = use_cases(Arc::new(FixedGenerator::default()), AnalysisConfig::immediate());

        analyze.execute(input("first", Platform::Instagram)).await.unwrap();
        let second = analyze.execute(input("second", Platform::Tiktok)).await.unwrap();

        let taken = take.execute().await.unwrap();
        assert_eq!(taken, second);
        assert_eq!(taken.account_id.as_str(), "second");
    }

    #[tokio::test]
    async fn test_repeated_analysis_draws_fresh_reports() {
        let (analyze, _) = use_cases(Arc::new(RandomReportGenerator::new()), AnalysisConfig::immediate());

        let mut totals = Vec::new();
        for _ in 0..10 {
            let report = analyze.analyze("user123", Platform::Tiktok).await.unwrap();
            assert_eq!(report.account_id.as_str(), "user123");
            assert_eq!(report.platform, Platform::Tiktok);
            totals.push(report.total_followers);
        }

        assert!(
            totals.iter().any(|t| *t != totals[0]),
            "Each analysis should be drawn independently"
        );
    }

    #[tokio::test]
    async fn test_blank_account_id_fails_before_latency() {
        let generator = Arc::new(FixedGenerator::default());
        let config = AnalysisConfig {
            latency: Duration::from_secs(60),
            ..Default::default()
        };
        let (analyze, take) = use_cases(generator.clone(), config);

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            analyze.execute(input("   ", Platform::Tiktok)),
        )
        .await
        .expect("validation must not wait for the latency");

        assert!(matches!(outcome, Err(AnalysisError::InvalidAccountId)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(take.execute().await.is_err());
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let config = AnalysisConfig {
            latency: Duration::from_millis(50),
            ..Default::default()
        };
        let (analyze, _) = use_cases(Arc::new(FixedGenerator::default()), config);

        let started = Instant::now();
        analyze.analyze("user123", Platform::Instagram).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_analyze_does_not_touch_handoff() {
        let (analyze, take) = use_cases(Arc::new(FixedGenerator::default()), AnalysisConfig::immediate());

        analyze.analyze("user123", Platform::Instagram).await.unwrap();
        assert!(take.execute().await.is_err());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use platform::MemoryKvStore;
    use tower::ServiceExt;

    use crate::application::AnalysisConfig;
    use crate::domain::services::RandomReportGenerator;
    use crate::infra::KvResultHandoff;
    use crate::presentation::analysis_router;

    fn app() -> Router {
        let config = Arc::new(AnalysisConfig::immediate());
        let handoff = Arc::new(KvResultHandoff::new(
            Arc::new(MemoryKvStore::new()),
            config.result_key.clone(),
        ));
        Router::new().nest(
            "/api/analysis",
            analysis_router(Arc::new(RandomReportGenerator::new()), handoff, config),
        )
    }

    fn analyze_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analysis/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn result_request() -> Request<Body> {
        Request::builder()
            .uri("/api/analysis/result")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_and_fetch_result_once() {
        let app = app();

        let response = app
            .clone()
            .oneshot(analyze_request(
                serde_json::json!({ "accountId": "user123", "platform": "TikTok" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response).await;
        assert_eq!(report["accountId"], "user123");
        assert_eq!(report["platform"], "tiktok");
        assert!(report["riskSummary"].is_string());
        assert!(report["suspiciousAccounts"].is_array());

        let response = app.clone().oneshot(result_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let taken = body_json(response).await;
        assert_eq!(taken["accountId"], report["accountId"]);
        assert_eq!(taken["totalFollowers"], report["totalFollowers"]);
        assert_eq!(taken["botFollowers"], report["botFollowers"]);
        assert_eq!(taken["riskLevel"], report["riskLevel"]);

        let response = app.oneshot(result_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let problem = body_json(response).await;
        assert_eq!(problem["action"], "/dashboard");
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_account_id() {
        let response = app()
            .oneshot(analyze_request(
                serde_json::json!({ "accountId": "  ", "platform": "instagram" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_platform() {
        let response = app()
            .oneshot(analyze_request(
                serde_json::json!({ "accountId": "user123", "platform": "youtube" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = body_json(response).await;
        assert_eq!(problem["detail"], "Unsupported platform: youtube");
    }
}
