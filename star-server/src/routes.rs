//! HTTP routes for chart uploads.
//!
//! The service is a thin shim around [`star_detector::detect_stars_with_config`]:
//! it pulls the uploaded file out of a multipart body, runs detection on the
//! blocking pool and serializes either `{"stars": [...]}` or `{"error": ...}`.

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        DefaultBodyLimit, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use star_detector::{detect_stars_with_config, DetectorConfig, StarsResponse};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::error::AnalyzeError;

/// Name of the multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// Per-router state. Detection itself is stateless; only the parameters are
/// shared, and they are immutable.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub config: DetectorConfig,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthInfo {
    pub status: String,
    pub service: String,
}

/// Build the application router.
///
/// Any origin may call the API, with credentials, since the chart client is
/// served from elsewhere.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/analyze/", post(analyze))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// Detect stars in an uploaded image.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StarsResponse>, AnalyzeError> {
    let mut multipart = multipart?;
    let bytes = read_upload(&mut multipart).await?;
    let upload_len = bytes.len();

    let config = state.config;
    let stars = tokio::task::spawn_blocking(move || detect_stars_with_config(&bytes, &config))
        .await
        .map_err(|e| AnalyzeError::Worker(e.to_string()))??;

    info!(
        "Analyzed {} byte upload: {} stars",
        upload_len,
        stars.len()
    );

    Ok(Json(StarsResponse::from(stars)))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, AnalyzeError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(field.bytes().await?);
        }
    }
    Err(AnalyzeError::MissingFile)
}
