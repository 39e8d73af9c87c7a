//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Form-encoded submission body.
///
/// `url` is optional so that a missing field is reported as an invalid URL
/// rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitUrlForm {
    #[serde(default)]
    pub url: Option<String>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for ShortUrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
