//! Job handlers — the public board plus employer job management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use hirehub_core::error::AppError;
use hirehub_core::types::generate_public_id;
use hirehub_entity::account::Account;
use hirehub_entity::job::Job;
use hirehub_entity::job::model::{CreateJob, UpdateJob};

use crate::dto::request::{CreateJobRequest, UpdateApplicationStatusRequest, UpdateJobRequest};
use crate::dto::response::{ApiResponse, ApplicationResponse, JobResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::ActiveSession;
use crate::middleware::rbac::require_employer;
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    let jobs = state
        .job_repo
        .list_all()
        .await?
        .iter()
        .map(JobResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state
        .job_repo
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;
    Ok(Json(ApiResponse::ok(JobResponse::from(&job))))
}

/// GET /api/employers/jobs
pub async fn list_my_jobs(
    State(state): State<AppState>,
    session: ActiveSession,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    require_employer(&session)?;

    let jobs = state
        .job_repo
        .list_by_employer(session.id)
        .await?
        .iter()
        .map(JobResponse::from)
        .collect();
    Ok(Json(ApiResponse::ok(jobs)))
}

/// POST /api/employers/jobs
pub async fn create_job(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobResponse>>), ApiError> {
    require_employer(&session)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let job = state
        .job_repo
        .create(&CreateJob {
            public_id: generate_public_id("job"),
            employer_id: session.id,
            employer_name: session.short_display_name(),
            title: req.title,
            description: req.description,
            requirements: req.requirements,
            location: req.location,
        })
        .await?;

    tracing::info!(job_id = %job.id, employer_id = %session.id, "job posted");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(JobResponse::from(&job))),
    ))
}

/// PUT /api/employers/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(job_id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    require_employer(&session)?;
    let job = owned_job(&state, &session, job_id).await?;

    let updated = state
        .job_repo
        .update(&UpdateJob {
            id: job.id,
            title: req.title,
            description: req.description,
            requirements: req.requirements,
            location: req.location,
        })
        .await?;

    Ok(Json(ApiResponse::ok(JobResponse::from(&updated))))
}

/// DELETE /api/employers/jobs/{id}
///
/// Removes the job together with its applications and bookmarks.
pub async fn delete_job(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_employer(&session)?;
    let job = owned_job(&state, &session, job_id).await?;

    let removed = state.cascade.delete_job(job.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Job deleted along with {removed} application(s)"
    )))))
}

/// GET /api/employers/jobs/{id}/applications
pub async fn job_applications(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ApplicationResponse>>>, ApiError> {
    require_employer(&session)?;
    let job = owned_job(&state, &session, job_id).await?;

    let applications = state
        .application_repo
        .list_by_job(job.id)
        .await?
        .iter()
        .map(ApplicationResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok(applications)))
}

/// PUT /api/employers/applications/{id}/status
pub async fn update_application_status(
    State(state): State<AppState>,
    session: ActiveSession,
    Path(application_id): Path<Uuid>,
    Json(req): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApiResponse<ApplicationResponse>>, ApiError> {
    require_employer(&session)?;

    let application = state
        .application_repo
        .find_by_id(application_id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;

    // Status changes are gated on owning the job the application targets.
    owned_job(&state, &session, application.job_id).await?;

    let updated = state
        .application_repo
        .update_status(application.id, req.status)
        .await?;

    Ok(Json(ApiResponse::ok(ApplicationResponse::from(&updated))))
}

/// Loads a job and checks the caller posted it.
async fn owned_job(state: &AppState, caller: &Account, job_id: Uuid) -> Result<Job, ApiError> {
    let job = state
        .job_repo
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    if job.employer_id != caller.id {
        return Err(AppError::forbidden("You do not own this job").into());
    }
    Ok(job)
}
