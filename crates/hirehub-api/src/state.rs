//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use hirehub_auth::jwt::decoder::TokenVerifier;
use hirehub_auth::jwt::encoder::TokenIssuer;
use hirehub_auth::password::hasher::PasswordHasher;
use hirehub_auth::session::registry::SessionRegistry;
use hirehub_core::config::AppConfig;
use hirehub_database::repositories::{
    AccountRepository, ApplicationRepository, BookmarkRepository, CascadeExecutor, JobRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT issuer.
    pub token_issuer: Arc<TokenIssuer>,
    /// JWT verifier.
    pub token_verifier: Arc<TokenVerifier>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Server-side session registry.
    pub sessions: Arc<SessionRegistry>,

    /// Account repository.
    pub account_repo: Arc<AccountRepository>,
    /// Job repository.
    pub job_repo: Arc<JobRepository>,
    /// Application repository.
    pub application_repo: Arc<ApplicationRepository>,
    /// Bookmark repository.
    pub bookmark_repo: Arc<BookmarkRepository>,
    /// Transactional cascade deletes.
    pub cascade: Arc<CascadeExecutor>,
}
