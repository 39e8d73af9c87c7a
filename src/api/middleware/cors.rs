//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer that accepts requests from any origin.
///
/// Allows any origin, method and request header. Credentials are not
/// allowed, so browsers never send cookies cross-origin.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
