//! Session repository implementation.
//!
//! Sessions are keyed by email with a unique constraint, so each account
//! holds at most one server-side session row at any time.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::session::Session;

/// Repository for server-side session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the session row for an email, if one exists.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Replace any existing session for `email` with a fresh one.
    ///
    /// The delete and insert run in a single transaction so a concurrent
    /// replace cannot leave two rows for the same email. If two replaces
    /// race, the unique constraint rejects the loser and the caller may
    /// retry; the winner's session is the live one.
    pub async fn replace_for_email(
        &self,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Session> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM sessions WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete old session", e)
            })?;

        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (email, invalidated, expires_at) \
             VALUES ($1, FALSE, $2) RETURNING *",
        )
        .bind(email)
        .bind(expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.constraint() == Some("sessions_email_key") => {
                AppError::conflict("Session was replaced concurrently")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create session", e),
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit session replacement", e)
        })?;

        Ok(session)
    }

    /// Mark the session for `email` as invalidated.
    ///
    /// Invalidation is a tombstone rather than a delete: the row stays
    /// visible (until its expiry) so validity checks can distinguish
    /// "logged out" from "never logged in".
    pub async fn invalidate(&self, email: &str) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET invalidated = TRUE WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to invalidate session", e)
            })?;
        Ok(())
    }

    /// Remove the session row for `email`, if any.
    pub async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(())
    }

    /// Remove all expired session rows. Returns the number deleted.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
