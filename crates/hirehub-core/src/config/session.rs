//! Session registry configuration.

use serde::{Deserialize, Serialize};

/// Server-side session configuration.
///
/// The session TTL is an independent clock from the access token TTL.
/// Both checks run on session-checked routes; neither substitutes for
/// the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session record TTL in minutes. Defaults to the access token TTL.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Interval for expired session cleanup in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_minutes: u64,
}

fn default_ttl() -> u64 {
    15
}

fn default_cleanup_interval() -> u64 {
    30
}
