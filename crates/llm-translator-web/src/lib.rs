//! LLM Translator Web - HTTP boundary for the translation relay.
//!
//! The router and handlers live in the library so integration tests can
//! drive the real application; `main` only parses arguments and serves.

pub mod helpers;
pub mod routes;
pub mod state;

use axum::http::{HeaderValue, header};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use state::AppState;

/// Upload cap; matches the front end's file-size validation.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Resolve the static files directory.
///
/// Priority:
/// 1. Explicit path if provided
/// 2. ./static if it exists
/// 3. Crate's built-in static directory
pub fn resolve_static_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return PathBuf::from(path);
    }

    // Try ./static first (works in development and when running from crate dir)
    let local_static = PathBuf::from("static");
    if local_static.exists() && local_static.is_dir() {
        return local_static;
    }

    // Fall back to compiled-in path (useful for cargo run)
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Build the application router around shared, read-only state.
pub fn app(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    Router::new()
        // JSON API
        .route("/api/translate", post(routes::translate))
        .route("/api/model-info", get(routes::model_info))
        .route("/api/extract-text", post(routes::extract_text))
        // Browser front end, with Cache-Control: no-cache (cache but revalidate)
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                ))
                .service(ServeDir::new(static_dir)),
        )
        // Middleware
        // API responses carry live translation state and must not be cached
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, max-age=0"),
        ))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
