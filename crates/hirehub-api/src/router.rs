//! Route definitions for the HireHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(job_routes())
        .merge(employer_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", get(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Account self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(handlers::account::get_profile))
        .route("/users/profile", put(handlers::account::update_profile))
        .route("/users/profile", delete(handlers::account::delete_account))
        .route("/users/password", put(handlers::account::change_password))
        .route("/users/applications", get(handlers::account::my_applications))
        .route(
            "/users/applications/{id}",
            delete(handlers::account::withdraw_application),
        )
        .route("/users/bookmarks", get(handlers::account::my_bookmarks))
        .route(
            "/users/jobs/{id}/apply",
            post(handlers::account::apply_to_job),
        )
        .route(
            "/users/jobs/{id}/bookmark",
            post(handlers::account::toggle_bookmark),
        )
}

/// Public job board endpoints.
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::list_jobs))
        .route("/jobs/{id}", get(handlers::job::get_job))
}

/// Employer job management endpoints.
fn employer_routes() -> Router<AppState> {
    Router::new()
        .route("/employers/jobs", get(handlers::job::list_my_jobs))
        .route("/employers/jobs", post(handlers::job::create_job))
        .route("/employers/jobs/{id}", put(handlers::job::update_job))
        .route("/employers/jobs/{id}", delete(handlers::job::delete_job))
        .route(
            "/employers/jobs/{id}/applications",
            get(handlers::job::job_applications),
        )
        .route(
            "/employers/applications/{id}/status",
            put(handlers::job::update_application_status),
        )
}

/// Admin oversight endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/accounts", get(handlers::admin::list_accounts))
        .route(
            "/admin/accounts/{id}",
            delete(handlers::admin::delete_account),
        )
        .route(
            "/admin/applications",
            get(handlers::admin::list_applications),
        )
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
