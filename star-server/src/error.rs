//! Request errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use star_detector::{DetectError, ErrorResponse};
use thiserror::Error;
use tracing::{error, warn};

/// Everything that can go wrong while serving an analyze request.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The multipart body has no `file` field
    #[error("Upload is missing the \"file\" field")]
    MissingFile,

    /// The request body could not be read as multipart form data
    #[error("Malformed upload: {message}")]
    Upload { status: StatusCode, message: String },

    #[error(transparent)]
    Detect(#[from] DetectError),

    /// The blocking detection task panicked or was cancelled
    #[error("Detection worker failed: {0}")]
    Worker(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingFile => StatusCode::BAD_REQUEST,
            AnalyzeError::Upload { status, .. } => *status,
            AnalyzeError::Detect(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AnalyzeError::Detect(_) | AnalyzeError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AnalyzeError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AnalyzeError::Upload {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<axum::extract::multipart::MultipartRejection> for AnalyzeError {
    fn from(rejection: axum::extract::multipart::MultipartRejection) -> Self {
        AnalyzeError::Upload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Analyze request failed: {self}");
        } else {
            warn!("Rejected analyze request: {self}");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
