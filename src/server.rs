//! HTTP API for running audits
//!
//! - `POST /api/analyze` with `{"url": "..."}` returns the report as JSON
//! - `GET /health` returns `OK`
//!
//! Failures are returned as `{"error": "..."}` with a 4xx/5xx status.

use crate::analyzer;
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::fetch::PageFetcher;
use crate::results::Report;
use crate::utils::parse_target_url;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state for request handlers
pub struct AppState {
    pub fetcher: PageFetcher,
}

impl AppState {
    pub fn new(config: &AuditConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuditError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AuditError::InvalidInput { .. }
            | AuditError::Fetch(_)
            | AuditError::Analysis { .. } => self.to_string(),
            other => format!("Error analyzing URL: {}", other),
        };

        if status.is_server_error() {
            ::log::error!("{}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Builds the API router with permissive CORS
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds to the configured address and serves until the process exits
pub async fn serve(config: &AuditConfig) -> Result<()> {
    let state = AppState::new(config)?;
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    ::log::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Report>> {
    let Json(request) = payload.map_err(|rejection| {
        ::log::debug!("Rejected analyze request: {}", rejection);
        AuditError::invalid_input("URL is required")
    })?;

    let url = parse_target_url(&request.url)?;
    ::log::info!("Analyzing {}", url);

    let html = state.fetcher.fetch(&url).await?;
    // Parsing is CPU-bound and scales with page size
    let report = tokio::task::spawn_blocking(move || analyzer::analyze_html(&html))
        .await
        .map_err(|e| AuditError::analysis(format!("analysis task failed: {}", e)))??;
    ::log::info!("Finished {} with score {}", url, report.score);

    Ok(Json(report))
}
