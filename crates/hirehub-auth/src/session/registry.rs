//! Session registry: at most one live server-side session per account.
//!
//! Token validity and session validity are independent checks. A request
//! may carry a cryptographically valid access token while its session has
//! been invalidated by logout or superseded by a later login; routes that
//! opt into the session check reject such requests.

use chrono::{Duration, Utc};
use tracing::debug;

use hirehub_core::config::SessionConfig;
use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_database::repositories::SessionRepository;
use hirehub_entity::session::Session;

/// Manages server-side session rows keyed by account email.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    repo: SessionRepository,
    ttl_minutes: i64,
}

impl SessionRegistry {
    /// Creates a registry backed by the given repository.
    pub fn new(repo: SessionRepository, config: &SessionConfig) -> Self {
        Self {
            repo,
            ttl_minutes: config.ttl_minutes as i64,
        }
    }

    /// Starts a fresh session for `email`, superseding any existing one.
    ///
    /// Called on login and on refresh. Logging in from a second client
    /// replaces the first client's session, so the invalidated state of a
    /// prior logout never leaks into the new session.
    pub async fn start_session(&self, email: &str) -> AppResult<Session> {
        let expires_at = Utc::now() + Duration::minutes(self.ttl_minutes);
        let session = self.repo.replace_for_email(email, expires_at).await?;
        debug!(email = %email, expires_at = %expires_at, "session started");
        Ok(session)
    }

    /// Marks the session for `email` as invalidated.
    ///
    /// Missing sessions are a no-op so logout stays idempotent.
    pub async fn invalidate(&self, email: &str) -> AppResult<()> {
        self.repo.invalidate(email).await?;
        debug!(email = %email, "session invalidated");
        Ok(())
    }

    /// Reports whether `email` currently has a live session.
    pub async fn is_valid(&self, email: &str) -> AppResult<bool> {
        let session = self.repo.find_by_email(email).await?;
        Ok(session.as_ref().is_some_and(Session::is_valid))
    }

    /// Errors unless `email` has a live session.
    pub async fn ensure_valid(&self, email: &str) -> AppResult<()> {
        if self.is_valid(email).await? {
            Ok(())
        } else {
            Err(AppError::unauthenticated("Session is no longer valid"))
        }
    }

    /// Deletes sessions whose expiry has passed. Returns the row count.
    ///
    /// Expired sessions already fail [`is_valid`](Self::is_valid); this
    /// only reclaims the rows.
    pub async fn purge_expired(&self) -> AppResult<u64> {
        let purged = self.repo.purge_expired().await?;
        if purged > 0 {
            debug!(purged, "expired sessions purged");
        }
        Ok(purged)
    }
}
