//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hirehub_entity::account::{Account, Role, RoleProfile};
use hirehub_entity::application::{Application, ApplicationStatus};
use hirehub_entity::job::Job;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Account summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Internal account ID.
    pub id: Uuid,
    /// External identifier.
    pub public_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Age, if provided.
    pub age: Option<i32>,
    /// Role.
    pub role: Role,
    /// Avatar reference, if set.
    pub avatar: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            public_id: account.public_id.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            age: account.age,
            role: account.role,
            avatar: account.avatar.clone(),
            created_at: account.created_at,
        }
    }
}

/// Login response: the access token is also set as a cookie, but is
/// echoed in the body for clients that prefer the Authorization header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// The authenticated account.
    pub account: AccountResponse,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Freshly minted access token.
    pub access_token: String,
}

/// Profile response: account plus role-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The account.
    pub account: AccountResponse,
    /// Role-dependent payload (bookmarks and applications for applicants).
    pub profile: RoleProfile,
}

/// Job summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    /// Internal job ID.
    pub id: Uuid,
    /// External identifier.
    pub public_id: String,
    /// Display name of the posting employer.
    pub employer_name: String,
    /// Job title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Listed requirements.
    pub requirements: Vec<String>,
    /// Location.
    pub location: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Job> for JobResponse {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            public_id: job.public_id.clone(),
            employer_name: job.employer_name.clone(),
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            location: job.location.clone(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Application summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    /// Internal application ID.
    pub id: Uuid,
    /// External identifier.
    pub public_id: String,
    /// Job applied to.
    pub job_id: Uuid,
    /// Applying account.
    pub applicant_id: Uuid,
    /// Resume text or link.
    pub resume: String,
    /// Cover letter, if provided.
    pub cover_letter: Option<String>,
    /// Review status.
    pub status: ApplicationStatus,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Application> for ApplicationResponse {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id,
            public_id: application.public_id.clone(),
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            resume: application.resume.clone(),
            cover_letter: application.cover_letter.clone(),
            status: application.status,
            created_at: application.created_at,
        }
    }
}

/// Bookmark toggle outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkToggleResponse {
    /// Whether the job is bookmarked after the toggle.
    pub bookmarked: bool,
    /// Human-readable message.
    pub message: String,
}
