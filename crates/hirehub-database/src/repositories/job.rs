//! Job repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::job::Job;
use hirehub_entity::job::model::{CreateJob, UpdateJob};

/// Repository for job posting CRUD and query operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    /// List every job, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    /// List the jobs posted by a single employer, newest first.
    pub async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list jobs by employer", e)
        })
    }

    /// Fetch the jobs whose ids appear in `ids`, newest first.
    pub async fn list_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs by ids", e))
    }

    /// Insert a new job posting.
    pub async fn create(&self, input: &CreateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs \
             (public_id, employer_id, employer_name, title, description, requirements, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&input.public_id)
        .bind(input.employer_id)
        .bind(&input.employer_name)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Apply a partial update to a job. Fields left as `None` keep their
    /// current value.
    pub async fn update(&self, input: &UpdateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET \
             title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             requirements = COALESCE($4, requirements), \
             location = COALESCE($5, location), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(input.id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(&input.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::RowNotFound => AppError::not_found("Job not found"),
            _ => AppError::with_source(ErrorKind::Database, "Failed to update job", e),
        })
    }
}
