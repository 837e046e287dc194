//! Token cookie construction.
//!
//! Both tokens travel as HTTP-only cookies with `SameSite=None` so the
//! browser front-end on a different origin can use them; `Secure` is
//! required by browsers for `SameSite=None` and is only relaxed through
//! config for local development.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use hirehub_core::config::AuthConfig;

/// Builds the access token cookie.
pub fn access_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    build(
        config.access_cookie_name.clone(),
        token,
        Duration::minutes(config.access_ttl_minutes as i64),
        config.secure_cookies,
    )
}

/// Builds the refresh token cookie.
pub fn refresh_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    build(
        config.refresh_cookie_name.clone(),
        token,
        Duration::days(config.refresh_ttl_days as i64),
        config.secure_cookies,
    )
}

/// Builds an expired cookie that instructs the browser to drop `name`.
///
/// Attributes must match the original cookie or browsers will keep the
/// stale value.
pub fn removal_cookie(name: String, secure: bool) -> Cookie<'static> {
    let mut cookie = build(name, String::new(), Duration::ZERO, secure);
    cookie.make_removal();
    cookie
}

fn build(name: String, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .path("/")
        .max_age(max_age)
        .build()
}
