//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Key of the transaction-scoped advisory lock that serializes identifier
/// assignment across all connections.
const ASSIGN_LOCK_KEY: i64 = 0x5348_4f52_5455_524c;

/// PostgreSQL repository for URL records.
///
/// Identifier assignment runs `COUNT(*)` and `INSERT` inside one transaction
/// holding [`ASSIGN_LOCK_KEY`], so concurrent writers queue instead of
/// reading the same count. The `short_url` column is also `UNIQUE`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert_next(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(ASSIGN_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(&mut *tx)
            .await?;

        let (original_url, short_url): (String, i64) = sqlx::query_as(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING original_url, short_url
            "#,
        )
        .bind(original_url)
        .bind(count + 1)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(UrlRecord::new(original_url, short_url))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT original_url, short_url
            FROM urls
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(original_url, short_url)| UrlRecord::new(original_url, short_url)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT original_url, short_url
            FROM urls
            ORDER BY short_url, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(original_url, short_url)| UrlRecord::new(original_url, short_url))
            .collect())
    }
}
