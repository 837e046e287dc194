//! JWT claims, issuance, and verification.
//!
//! Access and refresh tokens are signed with independent HMAC secrets, so
//! an access token can never be presented where a refresh token is
//! expected or vice versa.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{AccessClaims, RefreshClaims};
pub use decoder::TokenVerifier;
pub use encoder::TokenIssuer;
