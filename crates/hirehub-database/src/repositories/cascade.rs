//! Transactional cascade deletes.
//!
//! Foreign keys in the schema are declared without `ON DELETE CASCADE`;
//! every multi-table delete runs through this executor so the full set of
//! dependent rows is removed in one transaction or not at all.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::account::{Account, Role};

/// Summary of the rows removed by an account cascade.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountCascadeReport {
    /// Jobs deleted (employer accounts only).
    pub jobs: u64,
    /// Applications deleted, whether submitted by or received by the account.
    pub applications: u64,
    /// Bookmark rows deleted.
    pub bookmarks: u64,
}

/// Runs multi-table deletes inside a single transaction.
#[derive(Debug, Clone)]
pub struct CascadeExecutor {
    pool: PgPool,
}

impl CascadeExecutor {
    /// Create a new cascade executor.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete an account together with everything that references it.
    ///
    /// For an applicant this removes their bookmarks and applications.
    /// For an employer it removes every job they posted along with the
    /// applications and bookmarks attached to those jobs. The session row
    /// for the account's email is removed in the same transaction.
    pub async fn delete_account(&self, account: &Account) -> AppResult<AccountCascadeReport> {
        let mut tx = self.pool.begin().await.map_err(begin_err)?;
        let mut report = AccountCascadeReport::default();

        match account.role {
            Role::Applicant => {
                report.bookmarks = exec_count(
                    &mut tx,
                    "DELETE FROM bookmarks WHERE account_id = $1",
                    account.id,
                    "Failed to delete bookmarks",
                )
                .await?;
                report.applications = exec_count(
                    &mut tx,
                    "DELETE FROM applications WHERE applicant_id = $1",
                    account.id,
                    "Failed to delete applications",
                )
                .await?;
            }
            Role::Employer => {
                report.applications = exec_count(
                    &mut tx,
                    "DELETE FROM applications WHERE job_id IN \
                     (SELECT id FROM jobs WHERE employer_id = $1)",
                    account.id,
                    "Failed to delete job applications",
                )
                .await?;
                report.bookmarks = exec_count(
                    &mut tx,
                    "DELETE FROM bookmarks WHERE job_id IN \
                     (SELECT id FROM jobs WHERE employer_id = $1)",
                    account.id,
                    "Failed to delete job bookmarks",
                )
                .await?;
                report.jobs = exec_count(
                    &mut tx,
                    "DELETE FROM jobs WHERE employer_id = $1",
                    account.id,
                    "Failed to delete jobs",
                )
                .await?;
            }
            Role::Admin => {}
        }

        sqlx::query("DELETE FROM sessions WHERE LOWER(email) = LOWER($1)")
            .bind(&account.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;

        let deleted = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete account", e)
            })?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.ok();
            return Err(AppError::not_found("Account not found"));
        }

        tx.commit().await.map_err(commit_err)?;

        info!(
            account_id = %account.id,
            role = %account.role,
            jobs = report.jobs,
            applications = report.applications,
            bookmarks = report.bookmarks,
            "account cascade delete committed"
        );
        Ok(report)
    }

    /// Delete a job together with its applications and bookmarks.
    ///
    /// Returns the number of applications removed.
    pub async fn delete_job(&self, job_id: Uuid) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(begin_err)?;

        let applications = exec_count(
            &mut tx,
            "DELETE FROM applications WHERE job_id = $1",
            job_id,
            "Failed to delete job applications",
        )
        .await?;

        exec_count(
            &mut tx,
            "DELETE FROM bookmarks WHERE job_id = $1",
            job_id,
            "Failed to delete job bookmarks",
        )
        .await?;

        let deleted = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(job_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.ok();
            return Err(AppError::not_found("Job not found"));
        }

        tx.commit().await.map_err(commit_err)?;

        info!(job_id = %job_id, applications, "job cascade delete committed");
        Ok(applications)
    }
}

async fn exec_count(
    tx: &mut Transaction<'_, Postgres>,
    sql: &str,
    id: Uuid,
    context: &str,
) -> AppResult<u64> {
    let result = sqlx::query(sql)
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, context.to_owned(), e))?;
    Ok(result.rows_affected())
}

fn begin_err(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
}

fn commit_err(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
}
