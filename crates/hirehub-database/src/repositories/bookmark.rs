//! Bookmark repository implementation.
//!
//! Bookmarks are a plain (account, job) pair table. The toggle operation
//! is expressed as a delete-first attempt so the handler stays a single
//! call regardless of the current state.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;

/// The outcome of toggling a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    /// The bookmark did not exist and was added.
    Added,
    /// The bookmark existed and was removed.
    Removed,
}

/// Repository for applicant job bookmarks.
#[derive(Debug, Clone)]
pub struct BookmarkRepository {
    pool: PgPool,
}

impl BookmarkRepository {
    /// Create a new bookmark repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the job ids bookmarked by an account, most recent first.
    pub async fn list_job_ids(&self, account_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT job_id FROM bookmarks WHERE account_id = $1 ORDER BY created_at DESC",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookmarks", e))
    }

    /// Toggle the bookmark for (`account_id`, `job_id`).
    ///
    /// Removes the row when present, inserts it when absent. A concurrent
    /// toggle that races the insert hits the primary key and is treated as
    /// the bookmark already being present, which keeps the operation
    /// symmetric under retries.
    pub async fn toggle(&self, account_id: Uuid, job_id: Uuid) -> AppResult<BookmarkToggle> {
        let deleted = sqlx::query("DELETE FROM bookmarks WHERE account_id = $1 AND job_id = $2")
            .bind(account_id)
            .bind(job_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove bookmark", e)
            })?;

        if deleted.rows_affected() > 0 {
            return Ok(BookmarkToggle::Removed);
        }

        sqlx::query(
            "INSERT INTO bookmarks (account_id, job_id) VALUES ($1, $2) \
             ON CONFLICT (account_id, job_id) DO NOTHING",
        )
        .bind(account_id)
        .bind(job_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add bookmark", e))?;

        Ok(BookmarkToggle::Added)
    }
}
