pub mod analyze;
pub mod report;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::report::ChartRenderer;
use crate::sentiment::SentimentModel;
use crate::store::RecordStore;

/// Shared handles built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn SentimentModel>,
    pub store: Arc<dyn RecordStore>,
    pub charts: Arc<ChartRenderer>,
}

/// Builds the full route table. Rendered charts are served back out of
/// `static_dir` under the same `/static` paths the report response returns.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/analyze", post(analyze::analyze))
        .route("/report", get(report::generate_report))
        .route("/health", get(health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
