//! Repository trait for URL record data access.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `original_url` under the next sequential short identifier.
    ///
    /// The identifier is `count of existing records + 1`. Implementations
    /// must perform the count and the insert as one atomic step so that
    /// concurrent callers never receive the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    async fn insert_next(&self, original_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds the first record with the given short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists records ordered by short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on persistence errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, AppError>;
}
