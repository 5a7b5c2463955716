//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use analysis::{AnalysisConfig, KvResultHandoff, RandomReportGenerator, analysis_router};
use auth::{AuthConfig, KvIdentityStore, SessionContext, auth_router, protect};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::{FileKvStore, MemoryKvStore};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,analysis=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Durable storage for identities and the active session
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    tokio::fs::create_dir_all(&data_dir).await?;
    let durable = Arc::new(FileKvStore::new(&data_dir));
    tracing::info!(data_dir = %durable.root().display(), "Storage ready");

    // Auth
    let auth_config = Arc::new(AuthConfig::default());
    let identities =
        Arc::new(KvIdentityStore::load(durable.clone(), auth_config.users_key.clone()).await);
    let session = Arc::new(SessionContext::restore(identities, durable, auth_config).await);

    // Analysis: the pending report only lives as long as the process
    let latency_ms = match env::var("ANALYSIS_LATENCY_MS") {
        Ok(raw) => raw.trim().parse::<u64>()?,
        Err(_) => 2000,
    };
    let analysis_config = Arc::new(AnalysisConfig {
        latency: Duration::from_millis(latency_ms),
        ..AnalysisConfig::default()
    });
    let handoff = Arc::new(KvResultHandoff::new(
        Arc::new(MemoryKvStore::new()),
        analysis_config.result_key.clone(),
    ));
    let analysis = analysis_router(
        Arc::new(RandomReportGenerator::new()),
        handoff,
        analysis_config,
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .expose_headers([header::HeaderName::from_static(auth::REDIRECT_HEADER)]);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(session.clone()))
        .nest("/api/analysis", protect(analysis, session))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:31113".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
