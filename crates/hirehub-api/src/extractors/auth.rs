//! Auth extractors.
//!
//! `AuthAccount` runs the token stage of the auth guard: no credential is
//! a 401, a credential that fails verification is a 403, and a verified
//! credential whose account no longer exists is a 401 again. `ActiveSession`
//! layers the server-side session check on top for routes that must not
//! accept tokens outliving a logout or a supersession.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use hirehub_core::error::AppError;
use hirehub_entity::account::Account;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated account, freshly loaded from the database.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub Account);

impl std::ops::Deref for AuthAccount {
    type Target = Account;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, state)
            .ok_or_else(|| AppError::unauthenticated("Missing access token"))?;

        let claims = state.token_verifier.decode_access_token(&token)?;

        // The account may have been deleted after the token was issued.
        let account = state
            .account_repo
            .find_by_id(claims.account_id())
            .await?
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

        Ok(AuthAccount(account))
    }
}

/// An authenticated account whose server-side session is still live.
#[derive(Debug, Clone)]
pub struct ActiveSession(pub AuthAccount);

impl std::ops::Deref for ActiveSession {
    type Target = Account;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for ActiveSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthAccount::from_request_parts(parts, state).await?;
        state.sessions.ensure_valid(&auth.email).await?;
        Ok(ActiveSession(auth))
    }
}

/// Pulls the access token from the cookie, falling back to a Bearer
/// Authorization header.
fn extract_token(parts: &Parts, state: &AppState) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(&state.config.auth.access_cookie_name) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}
