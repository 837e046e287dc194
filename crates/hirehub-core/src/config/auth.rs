//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The two token secrets are independent so that a leaked access token
/// secret does not compromise refresh tokens, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Argon2 time cost (iterations) for password hashing.
    #[serde(default = "default_work_factor")]
    pub hash_work_factor: u32,
    /// Name of the access token cookie.
    #[serde(default = "default_access_cookie")]
    pub access_cookie_name: String,
    /// Name of the refresh token cookie.
    #[serde(default = "default_refresh_cookie")]
    pub refresh_cookie_name: String,
    /// Whether cookies carry the Secure flag (disable for plain-HTTP dev).
    #[serde(default = "default_true")]
    pub secure_cookies: bool,
}

fn default_access_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_TOO_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_work_factor() -> u32 {
    3
}

fn default_access_cookie() -> String {
    "jwt-token".to_string()
}

fn default_refresh_cookie() -> String {
    "jwt-token-refresh".to_string()
}

fn default_true() -> bool {
    true
}
