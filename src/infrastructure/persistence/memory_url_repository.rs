//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// URL repository that keeps records in process memory.
///
/// Counting and appending happen under one lock, which gives the same
/// uniqueness guarantee as [`super::PgUrlRepository`]. Records are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert_next(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().await;

        let short_url = records.len() as i64 + 1;
        let record = UrlRecord::new(original_url, short_url);
        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.lock().await;

        Ok(records.iter().find(|r| r.short_url == short_url).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().await.len() as i64)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.records.lock().await;

        Ok(records
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
