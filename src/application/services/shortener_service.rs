//! Short identifier assignment and lookup service.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service owning the mapping from sequential short identifiers to URLs.
///
/// URLs are never deduplicated: shortening the same URL twice creates two
/// records with two identifiers.
pub struct ShortenerService {
    url_repository: Arc<dyn UrlRepository>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<dyn UrlRepository>) -> Self {
        Self { url_repository }
    }

    /// Assigns the next identifier to an already validated URL and persists it.
    ///
    /// The identifier equals the number of stored records plus one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the record cannot be persisted.
    pub async fn assign(&self, original_url: String) -> Result<UrlRecord, AppError> {
        let record = self.url_repository.insert_next(&original_url).await?;

        info!(
            short_url = record.short_url,
            "Assigned short url to {}", record.original_url
        );

        Ok(record)
    }

    /// Resolves a short identifier received as a path segment.
    ///
    /// The segment is parsed as an integer; anything that does not parse, or
    /// is not positive, cannot match a record and is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Store`] on persistence errors.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlRecord, AppError> {
        let short_url = parse_short_id(short_id).ok_or(AppError::NotFound)?;

        self.url_repository
            .find_by_short_url(short_url)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }

    /// Lists stored records ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list(limit, offset).await
    }
}

/// Parses a path segment into a positive short identifier.
fn parse_short_id(short_id: &str) -> Option<i64> {
    short_id.parse::<i64>().ok().filter(|id| *id > 0)
}
