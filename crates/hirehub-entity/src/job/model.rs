//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting created by an employer.
///
/// All references to a job (bookmarks, applications) use the internal
/// UUID; `public_id` is a display identifier only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Human-facing public identifier (`job-...`).
    pub public_id: String,
    /// The employer account that owns this posting.
    pub employer_id: Uuid,
    /// Employer display name ("First L.") captured at creation.
    pub employer_name: String,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Listed requirements.
    pub requirements: Vec<String>,
    /// Job location.
    pub location: String,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
    /// When the posting was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Public identifier (`job-...`).
    pub public_id: String,
    /// Owning employer account id.
    pub employer_id: Uuid,
    /// Employer display name.
    pub employer_name: String,
    /// Job title.
    pub title: String,
    /// Job description.
    pub description: String,
    /// Listed requirements.
    pub requirements: Vec<String>,
    /// Job location.
    pub location: String,
}

/// Data for updating an existing job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJob {
    /// The job ID to update.
    pub id: Uuid,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New requirements.
    pub requirements: Option<Vec<String>>,
    /// New location.
    pub location: Option<String>,
}
