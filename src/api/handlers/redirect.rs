//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Responses
///
/// - `302 Found` with `Location` set to the original URL
/// - `404 {"error": "No short URL found"}` for unknown or non-numeric identifiers
/// - `500 {"error": "Server error"}` on store failure
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.shortener_service.resolve(&short_url).await?;

    debug!("Redirecting {} to {}", short_url, record.original_url);

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds a `Location` header value.
///
/// URLs are stored as submitted and may contain characters that are not
/// allowed in a URI reference (spaces, quotes, non-ASCII). The header always
/// carries the parser's serialization, which percent-encodes them.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    let encoded = Url::parse(original_url).map_err(|e| AppError::Store(e.to_string()))?;
    HeaderValue::from_str(encoded.as_str()).map_err(|e| AppError::Store(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_passthrough() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_header_encodes_non_ascii() {
        let value = location_header("https://example.com/caf\u{e9}").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }

    #[test]
    fn test_location_header_encodes_spaces_and_quotes() {
        let value = location_header("https://www.example.com/a b?q=\"x y\"").unwrap();
        assert_eq!(value, "https://www.example.com/a%20b?q=%22x%20y%22");
    }

    #[test]
    fn test_location_header_rejects_unparseable_record() {
        let result = location_header("not a url");
        assert!(matches!(result.unwrap_err(), AppError::Store(_)));
    }
}
