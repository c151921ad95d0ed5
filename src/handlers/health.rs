use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::SharedStore;

/// GET /health - Liveness plus a storage ping
pub async fn get(Extension(store): Extension<SharedStore>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check storage ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
