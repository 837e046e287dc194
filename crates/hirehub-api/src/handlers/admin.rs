//! Admin handlers — account oversight and application listings.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use hirehub_core::error::AppError;

use crate::dto::response::{AccountResponse, ApiResponse, ApplicationResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::ActiveSession;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/accounts
///
/// Lists every account except the calling admin.
pub async fn list_accounts(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, ApiError> {
    require_admin(&session)?;

    let accounts = state
        .account_repo
        .list_all_except(session.id)
        .await?
        .iter()
        .map(AccountResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(accounts)))
}

/// DELETE /api/admin/accounts/{id}
///
/// Removes an account with the same cascade semantics as self-deletion.
pub async fn delete_account(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(account_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&session)?;

    let target = state
        .account_repo
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::not_found("Account not found"))?;

    let report = state.cascade.delete_account(&target).await?;

    tracing::info!(
        admin_id = %session.id,
        account_id = %target.id,
        jobs = report.jobs,
        applications = report.applications,
        "account removed by admin"
    );

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Account deleted",
    ))))
}

/// GET /api/admin/applications
pub async fn list_applications(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<Vec<ApplicationResponse>>>, ApiError> {
    require_admin(&session)?;

    let applications = state
        .application_repo
        .list_all()
        .await?
        .iter()
        .map(ApplicationResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(applications)))
}
