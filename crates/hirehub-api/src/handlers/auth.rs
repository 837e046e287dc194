//! Auth handlers: register, login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use hirehub_core::error::AppError;
use hirehub_core::types::generate_public_id;
use hirehub_entity::account::model::CreateAccount;

use crate::cookies;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{
    AccountResponse, ApiResponse, LoginResponse, MessageResponse, RefreshResponse,
};
use crate::error::ApiError;
use crate::extractors::auth::AuthAccount;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state.account_repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("An account with this email already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;

    let account = state
        .account_repo
        .create(&CreateAccount {
            public_id: generate_public_id("user"),
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
            email: req.email,
            password_hash,
            role: req.role,
        })
        .await?;

    tracing::info!(account_id = %account.id, role = %account.role, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AccountResponse::from(&account))),
    ))
}

/// POST /api/auth/login
///
/// An unknown email is a 404 while a wrong password is a 401, so a client
/// can distinguish "no such account" from "bad credentials". Each login
/// supersedes any previous session for the same account.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state
        .account_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::not_found("No account with this email"))?;

    let verified = state
        .password_hasher
        .verify_password(&req.password, &account.password_hash)?;
    if !verified {
        return Err(AppError::unauthenticated("Invalid credentials").into());
    }

    state.sessions.start_session(&account.email).await?;

    let (access_token, _) = state.token_issuer.issue_access_token(&account)?;
    let (refresh_token, _) = state.token_issuer.issue_refresh_token(&account.email)?;

    let jar = jar
        .add(cookies::access_cookie(&state.config.auth, access_token.clone()))
        .add(cookies::refresh_cookie(&state.config.auth, refresh_token));

    tracing::info!(account_id = %account.id, "login succeeded");

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            access_token,
            account: AccountResponse::from(&account),
        })),
    ))
}

/// GET /api/auth/refresh
///
/// Mints a new access token from the refresh cookie. The refresh token
/// itself is not rotated; it stays valid until its own expiry. A fresh
/// server-side session is started so refresh also revives a session that
/// timed out.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<RefreshResponse>>), ApiError> {
    let refresh_token = jar
        .get(&state.config.auth.refresh_cookie_name)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::unauthenticated("Missing refresh token"))?;

    let claims = state.token_verifier.decode_refresh_token(&refresh_token)?;

    let account = state
        .account_repo
        .find_by_email(&claims.email)
        .await?
        .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

    state.sessions.start_session(&account.email).await?;

    let (access_token, _) = state.token_issuer.issue_access_token(&account)?;
    let jar = jar.add(cookies::access_cookie(
        &state.config.auth,
        access_token.clone(),
    ));

    Ok((jar, Json(ApiResponse::ok(RefreshResponse { access_token }))))
}

/// POST /api/auth/logout
///
/// Requires a valid access token but deliberately not a live session, so
/// logout stays idempotent. The access cookie is cleared unconditionally,
/// even on the 401 path for a missing refresh cookie, so a client with
/// half its cookies gone still ends up logged out. The session row is
/// invalidated rather than deleted.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthAccount,
    jar: CookieJar,
) -> Result<Response, ApiError> {
    let auth_config = &state.config.auth;
    let jar = jar.remove(cookies::removal_cookie(
        auth_config.access_cookie_name.clone(),
        auth_config.secure_cookies,
    ));

    if jar.get(&auth_config.refresh_cookie_name).is_none() {
        let err = ApiError(AppError::unauthenticated("No active session"));
        let body = err.body();
        return Ok((StatusCode::UNAUTHORIZED, jar, Json(body)).into_response());
    }

    state.sessions.invalidate(&auth.email).await?;

    let jar = jar.remove(cookies::removal_cookie(
        auth_config.refresh_cookie_name.clone(),
        auth_config.secure_cookies,
    ));

    tracing::info!(account_id = %auth.id, "logout");

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new(
            "Logged out successfully",
        ))),
    )
        .into_response())
}
