//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session record, one per account email.
///
/// A session exists independently of any token's signature validity: it
/// is the revocation flag consulted on session-checked routes. Logout
/// sets `invalidated` rather than deleting the row, so evidence of the
/// logout survives until the row's natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The account email this session belongs to (unique key).
    pub email: String,
    /// Whether the session has been explicitly invalidated (logout).
    pub invalidated: bool,
    /// When the session was created (login or refresh time).
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Check whether the session is valid: not invalidated and not
    /// expired. Both expiry and explicit invalidation are terminal.
    pub fn is_valid(&self) -> bool {
        !self.invalidated && !self.is_expired()
    }
}
