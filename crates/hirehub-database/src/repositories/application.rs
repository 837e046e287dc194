//! Application repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::application::model::CreateApplication;
use hirehub_entity::application::{Application, ApplicationStatus};

/// Repository for job applications.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an application by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application by id", e)
            })
    }

    /// Insert a new application. An applicant applying twice to the same
    /// job trips the (job, applicant) unique constraint and maps to a
    /// conflict error.
    pub async fn create(&self, input: &CreateApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications \
             (public_id, job_id, applicant_id, resume, cover_letter, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&input.public_id)
        .bind(input.job_id)
        .bind(input.applicant_id)
        .bind(&input.resume)
        .bind(&input.cover_letter)
        .bind(ApplicationStatus::Applied)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db)
                if db.constraint() == Some("applications_job_id_applicant_id_key") =>
            {
                AppError::conflict("You have already applied to this job")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create application", e),
        })
    }

    /// List the applications submitted by one applicant, newest first.
    pub async fn list_by_applicant(&self, applicant_id: Uuid) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE applicant_id = $1 ORDER BY created_at DESC",
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
        })
    }

    /// List the applications received for one job, oldest first.
    pub async fn list_by_job(&self, job_id: Uuid) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE job_id = $1 ORDER BY created_at ASC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list job applications", e)
        })
    }

    /// List every application in the system, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list all applications", e)
            })
    }

    /// Delete an application owned by `applicant_id`.
    ///
    /// Matching on both ids means a withdrawal aimed at someone else's
    /// application reports not-found rather than revealing it exists.
    pub async fn delete_for_applicant(&self, id: Uuid, applicant_id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("DELETE FROM applications WHERE id = $1 AND applicant_id = $2")
                .bind(id)
                .bind(applicant_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete application", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Application not found"));
        }
        Ok(())
    }

    /// Change the review status of an application.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::RowNotFound => AppError::not_found("Application not found"),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update application", e),
        })
    }
}
