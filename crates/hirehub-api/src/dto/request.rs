//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hirehub_entity::account::Role;
use hirehub_entity::application::ApplicationStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address, unique per account.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Age, optional.
    #[validate(range(min = 16, max = 120))]
    pub age: Option<i32>,
    /// Requested role.
    pub role: Role,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Age, optional.
    #[validate(range(min = 16, max = 120))]
    pub age: Option<i32>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change is applied.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Account deletion request. Deleting an account requires re-entering
/// the password even with a valid token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteAccountRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Job creation request (employer).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Job title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Full description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Listed requirements.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Location.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

/// Partial job update request (employer). Omitted fields are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    /// Job title.
    pub title: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Listed requirements.
    pub requirements: Option<Vec<String>>,
    /// Location.
    pub location: Option<String>,
}

/// Job application request (applicant).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyRequest {
    /// Resume text or link.
    #[validate(length(min = 1, message = "Resume is required"))]
    pub resume: String,
    /// Optional cover letter.
    pub cover_letter: Option<String>,
}

/// Application status change request (employer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    /// New review status.
    pub status: ApplicationStatus,
}
