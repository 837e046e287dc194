//! Account self-service handlers — profile, password, applications,
//! bookmarks, and account deletion.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;
use validator::Validate;

use hirehub_core::error::AppError;
use hirehub_core::types::generate_public_id;
use hirehub_database::repositories::bookmark::BookmarkToggle;
use hirehub_entity::account::RoleProfile;
use hirehub_entity::account::model::UpdateAccount;
use hirehub_entity::application::model::CreateApplication;

use crate::cookies;
use crate::dto::request::{
    ApplyRequest, ChangePasswordRequest, DeleteAccountRequest, UpdateProfileRequest,
};
use crate::dto::response::{
    AccountResponse, ApiResponse, ApplicationResponse, BookmarkToggleResponse, JobResponse,
    MessageResponse, ProfileResponse,
};
use crate::error::ApiError;
use crate::extractors::ActiveSession;
use crate::middleware::rbac::require_applicant;
use crate::state::AppState;

/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let account = &session.0;

    let (bookmarks, applications) = if account.role.is_applicant() {
        let bookmarks = state.bookmark_repo.list_job_ids(account.id).await?;
        let applications = state
            .application_repo
            .list_by_applicant(account.id)
            .await?
            .iter()
            .map(|a| a.job_id)
            .collect();
        (bookmarks, applications)
    } else {
        (Vec::new(), Vec::new())
    };

    let profile = RoleProfile::for_role(account.role, bookmarks, applications);

    Ok(Json(ApiResponse::ok(ProfileResponse {
        account: AccountResponse::from(&account.0),
        profile,
    })))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state
        .account_repo
        .email_taken_by_other(&req.email, session.id)
        .await?
    {
        return Err(AppError::conflict("An account with this email already exists").into());
    }

    let updated = state
        .account_repo
        .update_profile(&UpdateAccount {
            id: session.id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            age: req.age,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AccountResponse::from(&updated))))
}

/// PUT /api/users/password
pub async fn change_password(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let verified = state
        .password_hasher
        .verify_password(&req.current_password, &session.password_hash)?;
    if !verified {
        return Err(AppError::forbidden("Current password is incorrect").into());
    }

    let new_hash = state.password_hasher.hash_password(&req.new_password)?;
    state
        .account_repo
        .update_password(session.id, &new_hash)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password updated",
    ))))
}

/// DELETE /api/users/profile
///
/// Deleting an account requires re-entering the password. On success the
/// account and everything attached to it are removed in one transaction
/// and both token cookies are cleared.
pub async fn delete_account(
    State(state): State<AppState>,
    session: ActiveSession,
    jar: CookieJar,
    Json(req): Json<DeleteAccountRequest>,
) -> Result<(StatusCode, CookieJar), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let verified = state
        .password_hasher
        .verify_password(&req.password, &session.password_hash)?;
    if !verified {
        return Err(AppError::forbidden("Password is incorrect").into());
    }

    state.cascade.delete_account(&session.0).await?;

    let auth = &state.config.auth;
    let jar = jar
        .remove(cookies::removal_cookie(
            auth.access_cookie_name.clone(),
            auth.secure_cookies,
        ))
        .remove(cookies::removal_cookie(
            auth.refresh_cookie_name.clone(),
            auth.secure_cookies,
        ));

    Ok((StatusCode::NO_CONTENT, jar))
}

/// DELETE /api/users/applications/{id}
///
/// Withdraws one of the caller's applications.
pub async fn withdraw_application(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(application_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_applicant(&session)?;

    state
        .application_repo
        .delete_for_applicant(application_id, session.id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Application withdrawn",
    ))))
}

/// GET /api/users/applications
pub async fn my_applications(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<Vec<ApplicationResponse>>>, ApiError> {
    require_applicant(&session)?;

    let applications = state
        .application_repo
        .list_by_applicant(session.id)
        .await?
        .iter()
        .map(ApplicationResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(applications)))
}

/// GET /api/users/bookmarks
pub async fn my_bookmarks(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    require_applicant(&session)?;

    let job_ids = state.bookmark_repo.list_job_ids(session.id).await?;
    let jobs = state
        .job_repo
        .list_by_ids(&job_ids)
        .await?
        .iter()
        .map(JobResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(jobs)))
}

/// POST /api/users/jobs/{id}/apply
pub async fn apply_to_job(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(job_id): Path<Uuid>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationResponse>>), ApiError> {
    require_applicant(&session)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .job_repo
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    let application = state
        .application_repo
        .create(&CreateApplication {
            public_id: generate_public_id("app"),
            job_id,
            applicant_id: session.id,
            resume: req.resume,
            cover_letter: req.cover_letter,
        })
        .await?;

    tracing::info!(
        application_id = %application.id,
        job_id = %job_id,
        "application submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ApplicationResponse::from(&application))),
    ))
}

/// POST /api/users/jobs/{id}/bookmark
///
/// Toggles the bookmark: a second identical call undoes the first.
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookmarkToggleResponse>>, ApiError> {
    require_applicant(&session)?;

    state
        .job_repo
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    let outcome = state.bookmark_repo.toggle(session.id, job_id).await?;

    let response = match outcome {
        BookmarkToggle::Added => BookmarkToggleResponse {
            bookmarked: true,
            message: "Job bookmarked".to_string(),
        },
        BookmarkToggle::Removed => BookmarkToggleResponse {
            bookmarked: false,
            message: "Bookmark removed".to_string(),
        },
    };

    Ok(Json(ApiResponse::ok(response)))
}
