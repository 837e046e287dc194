//! Authentication for HireHub: JWT encoding/decoding, Argon2id password
//! hashing, and the server-side session registry.

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{AccessClaims, RefreshClaims, TokenIssuer, TokenVerifier};
pub use password::PasswordHasher;
pub use session::SessionRegistry;
