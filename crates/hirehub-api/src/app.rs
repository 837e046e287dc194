//! Application builder — wires repositories, auth, and state into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use hirehub_auth::jwt::{TokenIssuer, TokenVerifier};
use hirehub_auth::password::PasswordHasher;
use hirehub_auth::session::SessionRegistry;
use hirehub_core::config::AppConfig;
use hirehub_core::error::AppError;
use hirehub_database::repositories::{
    AccountRepository, ApplicationRepository, BookmarkRepository, CascadeExecutor, JobRepository,
    SessionRepository,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let session_repo = SessionRepository::new(db_pool.clone());

    AppState {
        token_issuer: Arc::new(TokenIssuer::new(&config.auth)),
        token_verifier: Arc::new(TokenVerifier::new(&config.auth)),
        password_hasher: Arc::new(PasswordHasher::new(&config.auth)),
        sessions: Arc::new(SessionRegistry::new(session_repo, &config.session)),
        account_repo: Arc::new(AccountRepository::new(db_pool.clone())),
        job_repo: Arc::new(JobRepository::new(db_pool.clone())),
        application_repo: Arc::new(ApplicationRepository::new(db_pool.clone())),
        bookmark_repo: Arc::new(BookmarkRepository::new(db_pool.clone())),
        cascade: Arc::new(CascadeExecutor::new(db_pool.clone())),
        config: Arc::new(config),
        db_pool,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> Router {
    build_router(build_state(config, db_pool))
}

/// Periodically reclaims expired session rows.
fn spawn_session_cleanup(state: &AppState) {
    let sessions = Arc::clone(&state.sessions);
    let interval_minutes = state.config.session.cleanup_interval_minutes.max(1);

    tokio::spawn(async move {
        let period = std::time::Duration::from_secs(interval_minutes * 60);
        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = sessions.purge_expired().await {
                tracing::warn!(error = %e, "session cleanup failed");
            }
        }
    });
}

/// Runs the HireHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool);
    spawn_session_cleanup(&state);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HireHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
}
