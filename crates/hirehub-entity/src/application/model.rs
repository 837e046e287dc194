//! Job application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// An application submitted by an applicant to a job posting.
///
/// The `(job_id, applicant_id)` pair is unique: applying twice to the
/// same job is a conflict.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// Human-facing public identifier (`app-...`).
    pub public_id: String,
    /// The job this application targets.
    pub job_id: Uuid,
    /// The applicant account.
    pub applicant_id: Uuid,
    /// Resume reference or text.
    pub resume: String,
    /// Cover letter text, if provided.
    pub cover_letter: Option<String>,
    /// Review status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
    /// When the application was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplication {
    /// Public identifier (`app-...`).
    pub public_id: String,
    /// Target job id.
    pub job_id: Uuid,
    /// Applicant account id.
    pub applicant_id: Uuid,
    /// Resume reference or text.
    pub resume: String,
    /// Cover letter text, if provided.
    pub cover_letter: Option<String>,
}
