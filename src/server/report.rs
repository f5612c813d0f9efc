use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::report::{daily_trend, distribution, DISTRIBUTION_FILE, TREND_FILE};
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub message: String,
    /// Distribution chart first, trend chart second, as served under /static.
    pub files: Vec<String>,
}

/// GET /report - aggregate every stored record and render both charts.
/// Concurrent calls may overwrite each other's files; the last writer wins.
pub async fn generate_report(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse>, ApiError> {
    let records = state.store.find_all().await.map_err(ApiError::Store)?;
    if records.is_empty() {
        return Err(ApiError::NoData);
    }

    let counts = distribution(&records);
    let trend = daily_trend(&records);

    let charts = state.charts.clone();
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        charts.render_distribution(&counts)?;
        charts.render_trend(&trend)?;
        Ok(())
    })
    .await
    .map_err(|err| ApiError::Chart(err.into()))?
    .map_err(ApiError::Chart)?;

    info!("Report charts rendered from {} records", records.len());

    Ok(Json(ReportResponse {
        message: "Reports generated successfully.".to_string(),
        files: vec![
            format!("/static/{DISTRIBUTION_FILE}"),
            format!("/static/{TREND_FILE}"),
        ],
    }))
}
