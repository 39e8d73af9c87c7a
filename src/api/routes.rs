//! API route configuration.

use crate::api::handlers::{redirect_handler, submit_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`               - Shorten a URL (form field `url`)
/// - `GET  /shorturl/{short_url}`   - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(submit_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
