use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Reports healthy whenever the handler runs at all; the
/// store is deliberately not consulted.
pub async fn health_check() -> impl IntoResponse {
    tracing::info!("checking health");
    Json(json!({ "status": "OK" }))
}
