use axum::response::Json;
use serde_json::{json, Value};

/// GET /api/ - Greeting
pub async fn get() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
