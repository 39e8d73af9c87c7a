//! Handler for URL submission.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;

use crate::api::dto::shorturl::{ShortUrlResponse, SubmitUrlForm};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a URL and assigns it the next short identifier.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded, e.g. `url=https%3A%2F%2Fwww.example.com`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `200 {"error": "invalid url"}` if the field is missing, the body is not
///   form-encoded, the URL is malformed or not http/https, or the host does
///   not resolve
/// - `500 {"error": "Server error"}` if the record cannot be stored
pub async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<SubmitUrlForm>, FormRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let candidate = match form {
        Ok(Form(form)) => form.url,
        Err(rejection) => {
            debug!("Unreadable submission body: {}", rejection);
            None
        }
    };

    let original_url = state.validation_service.validate(candidate).await?;
    let record = state.shortener_service.assign(original_url).await?;

    Ok(Json(record.into()))
}
