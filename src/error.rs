use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Collaborator failures carry the
/// underlying error for the log; the response body stays generic.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No text provided.")]
    EmptyText,
    #[error("No data available.")]
    NoData,
    #[error("Sentiment model failure: {0}")]
    Provider(anyhow::Error),
    #[error("Record store failure: {0}")]
    Store(anyhow::Error),
    #[error("Chart rendering failure: {0}")]
    Chart(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmptyText => (StatusCode::BAD_REQUEST, "No text provided."),
            ApiError::NoData => (StatusCode::NOT_FOUND, "No data available."),
            ApiError::Provider(e) => {
                error!("Sentiment model failure: {:#}", e);
                (StatusCode::BAD_GATEWAY, "Sentiment model unavailable.")
            }
            ApiError::Store(e) => {
                error!("Record store failure: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Record store failure.")
            }
            ApiError::Chart(e) => {
                error!("Chart rendering failure: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Report generation failed.")
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
