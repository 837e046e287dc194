//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered account on the HireHub platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Human-facing public identifier (`user-...`).
    pub public_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age (optional).
    pub age: Option<i32>,
    /// Unique email address, also the session registry key.
    pub email: String,
    /// Argon2 password hash. Never serialized on any read path.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role, immutable after registration.
    pub role: Role,
    /// Avatar reference (optional).
    pub avatar: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Display name in the "First L." form used on job postings.
    pub fn short_display_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}.", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}

/// Role-conditional account data.
///
/// Bookmarks and applications exist only for applicants; employer and
/// admin accounts never carry them. Modeling this as a tagged variant
/// (rather than optional fields on [`Account`]) makes the absence
/// structural.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    /// Applicant data: ordered bookmarked job ids and applied job ids.
    Applicant {
        /// Bookmarked job ids, in bookmark order.
        bookmarks: Vec<Uuid>,
        /// Job ids the applicant has applied to.
        applications: Vec<Uuid>,
    },
    /// Employers carry no bookmark/application data.
    Employer,
    /// Admins carry no bookmark/application data.
    Admin,
}

impl RoleProfile {
    /// Build the profile variant matching a role, with applicant data
    /// supplied by the caller.
    pub fn for_role(role: Role, bookmarks: Vec<Uuid>, applications: Vec<Uuid>) -> Self {
        match role {
            Role::Applicant => Self::Applicant {
                bookmarks,
                applications,
            },
            Role::Employer => Self::Employer,
            Role::Admin => Self::Admin,
        }
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Public identifier (`user-...`).
    pub public_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age (optional).
    pub age: Option<i32>,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}

/// Data for updating an existing account's profile.
///
/// The password hash is deliberately absent: only the dedicated
/// password-update path may touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// The account ID to update.
    pub id: Uuid,
    /// New first name.
    pub first_name: String,
    /// New last name.
    pub last_name: String,
    /// New email address.
    pub email: String,
    /// New age.
    pub age: Option<i32>,
}
