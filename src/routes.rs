//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Landing page (`views/index.html`)
//! - `GET  /public/*`                  - Static assets
//! - `GET  /health`                    - Health check
//! - `POST /api/shorturl`              - Shorten a URL
//! - `GET  /api/shorturl/{short_url}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **CORS** - Any origin
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Directory holding the landing page, relative to the working directory.
pub const VIEWS_DIR: &str = "views";
/// Directory served under `/public`, relative to the working directory.
pub const PUBLIC_DIR: &str = "public";

/// Constructs the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(format!("{VIEWS_DIR}/index.html")))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(PUBLIC_DIR))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Wraps [`build_router`] so that `/api/shorturl/` and `/api/shorturl`
/// route identically.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
