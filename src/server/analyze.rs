use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::server::AppState;
use crate::store::SentimentRecord;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing and null are treated the same as an empty string.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub sentiment: String,
    pub confidence: f64,
}

/// POST /analyze - classify one text and persist the outcome.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::EmptyText);
    }

    let prediction = state
        .model
        .classify(&text)
        .await
        .map_err(ApiError::Provider)?;
    let sentiment = prediction.label.to_lowercase();

    let record = SentimentRecord {
        text,
        sentiment: sentiment.clone(),
        confidence: prediction.score,
        timestamp: Utc::now(),
    };
    state.store.insert(record).await.map_err(ApiError::Store)?;

    info!("Recorded {} sentiment ({:.3})", sentiment, prediction.score);

    Ok(Json(AnalyzeResponse {
        sentiment,
        confidence: prediction.score,
    }))
}
