use axum::{extract::DefaultBodyLimit, routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::SharedStore;
use crate::handlers;
use crate::middleware::cors_layer;

/// Assemble the full application router around a status store.
pub fn app(store: SharedStore, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health::get))
        .merge(api_routes())
        .fallback(handlers::not_found)
        // Global middleware
        .layer(Extension(store))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security.cors_origins));

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn api_routes() -> Router {
    use handlers::{root, status};

    Router::new()
        .route("/api/", get(root::get))
        .route("/api/status", get(status::get).post(status::post))
}
