//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// A role is fixed at registration time. Unlike hierarchical RBAC
/// schemes, route gates here require an exact role match: an admin is
/// not implicitly an employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker. The only role that can bookmark and apply.
    Applicant,
    /// Posts jobs and reviews applications to its own postings.
    Employer,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Check if this role is the applicant role.
    pub fn is_applicant(&self) -> bool {
        matches!(self, Self::Applicant)
    }

    /// Check if this role is the employer role.
    pub fn is_employer(&self) -> bool {
        matches!(self, Self::Employer)
    }

    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applicant" => Ok(Self::Applicant),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: applicant, employer, admin"
            ))),
        }
    }
}
