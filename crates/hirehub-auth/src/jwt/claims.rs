//! Claims payloads for access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hirehub_entity::account::Role;

/// Claims embedded in every access token.
///
/// The access token carries a snapshot of the account's public profile so
/// clients can render identity without an extra lookup. The snapshot is
/// refreshed whenever a new access token is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject — the account ID.
    pub sub: Uuid,
    /// External identifier exposed to clients.
    pub public_id: String,
    /// Account first name at issuance time.
    pub first_name: String,
    /// Account last name at issuance time.
    pub last_name: String,
    /// Account email at issuance time.
    pub email: String,
    /// Account age, if provided.
    pub age: Option<i32>,
    /// Account role at issuance time.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims embedded in every refresh token.
///
/// Deliberately minimal: the email is enough to re-load the account and
/// mint a fresh access token, and nothing else in it can go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Email of the account the token was issued to.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AccessClaims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
