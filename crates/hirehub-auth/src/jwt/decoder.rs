//! JWT validation.
//!
//! A token that is present but fails verification (bad signature, garbled
//! payload, expired) is a forbidden error; callers translate the absence
//! of a token into an unauthenticated error before ever reaching here.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use hirehub_core::config::AuthConfig;
use hirehub_core::error::AppError;

use super::claims::{AccessClaims, RefreshClaims};

/// Validates access and refresh tokens against their respective secrets.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC key for access token verification.
    access_key: DecodingKey,
    /// HMAC key for refresh token verification.
    refresh_key: DecodingKey,
    /// Shared validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds for clock skew
        validation.required_spec_claims.clear();

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        decode::<AccessClaims>(token, &self.access_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, AppError> {
        decode::<RefreshClaims>(token, &self.refresh_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> AppError {
    match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::forbidden("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::forbidden("Invalid token signature")
        }
        _ => AppError::forbidden("Token validation failed"),
    }
}
