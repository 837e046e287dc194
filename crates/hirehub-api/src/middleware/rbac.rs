//! Role guards for route handlers.
//!
//! Roles are checked by exact match: an admin calling an employer route
//! is rejected just like an applicant would be. Routes that should serve
//! several roles list each one explicitly.

use hirehub_core::error::AppError;
use hirehub_entity::account::{Account, Role};

/// Checks that the account holds the applicant role.
pub fn require_applicant(account: &Account) -> Result<(), AppError> {
    require_role(account, Role::Applicant)
}

/// Checks that the account holds the employer role.
pub fn require_employer(account: &Account) -> Result<(), AppError> {
    require_role(account, Role::Employer)
}

/// Checks that the account holds the admin role.
pub fn require_admin(account: &Account) -> Result<(), AppError> {
    require_role(account, Role::Admin)
}

fn require_role(account: &Account, role: Role) -> Result<(), AppError> {
    if account.role != role {
        return Err(AppError::forbidden(format!("{role} access required")));
    }
    Ok(())
}
