//! Integration tests for the auth lifecycle: login, refresh, logout, and
//! session supersession.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_login_success_sets_both_cookies() {
    let app = helpers::TestApp::new().await;
    app.register("login@test.com", "password123", "applicant")
        .await;

    let cookies = app.login_cookies("login@test.com", "password123").await;

    assert!(cookies.iter().any(|c| c.starts_with("jwt-token=")));
    assert!(cookies.iter().any(|c| c.starts_with("jwt-token-refresh=")));
    for cookie in &cookies {
        assert!(cookie.contains("HttpOnly"), "cookie not HttpOnly: {cookie}");
        assert!(
            cookie.contains("SameSite=None"),
            "cookie missing SameSite: {cookie}"
        );
    }
}

#[tokio::test]
async fn test_login_unknown_email_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let app = helpers::TestApp::new().await;
    app.register("wrongpw@test.com", "password123", "applicant")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "wrongpw@test.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_logins_keep_one_session_row() {
    let app = helpers::TestApp::new().await;
    app.register("repeat@test.com", "password123", "applicant")
        .await;

    app.login("repeat@test.com", "password123").await;
    app.login("repeat@test.com", "password123").await;
    app.login("repeat@test.com", "password123").await;

    assert_eq!(app.session_count("repeat@test.com").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email_is_409() {
    let app = helpers::TestApp::new().await;
    app.register("dup@test.com", "password123", "applicant")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "first_name": "Test",
                "last_name": "Account",
                "email": "dup@test.com",
                "password": "password123",
                "role": "employer",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_refresh_without_cookie_is_401() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/refresh", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_with_garbage_cookie_is_403() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request_with_cookies(
            "GET",
            "/api/auth/refresh",
            None,
            None,
            &["jwt-token-refresh=not-a-jwt".to_string()],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_refresh_mints_new_access_token() {
    let app = helpers::TestApp::new().await;
    app.register("refresh@test.com", "password123", "applicant")
        .await;
    let cookies = app.login_cookies("refresh@test.com", "password123").await;

    let response = app
        .request_with_cookies("GET", "/api/auth/refresh", None, None, &cookies)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].as_str().is_some());
    assert_eq!(app.session_count("refresh@test.com").await, 1);
}

#[tokio::test]
async fn test_logout_without_refresh_cookie_is_401() {
    let app = helpers::TestApp::new().await;
    app.register("half@test.com", "password123", "applicant")
        .await;
    let token = app.login("half@test.com", "password123").await;

    // A bearer token without the refresh cookie still gets turned away,
    // but the access cookie is cleared regardless.
    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = helpers::TestApp::new().await;
    app.register("logout@test.com", "password123", "applicant")
        .await;
    let cookies = app.login_cookies("logout@test.com", "password123").await;
    let token = app.login("logout@test.com", "password123").await;

    let response = app
        .request_with_cookies("POST", "/api/auth/logout", None, None, &cookies)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token still verifies, but session-checked routes reject it.
    let profile = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_after_logout_revives_access() {
    let app = helpers::TestApp::new().await;
    app.register("revive@test.com", "password123", "applicant")
        .await;
    let cookies = app.login_cookies("revive@test.com", "password123").await;

    app.request_with_cookies("POST", "/api/auth/logout", None, None, &cookies)
        .await;

    let token = app.login("revive@test.com", "password123").await;
    let profile = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_sessions_are_purged() {
    use hirehub_auth::session::SessionRegistry;
    use hirehub_database::repositories::SessionRepository;

    let app = helpers::TestApp::new().await;
    app.register("stale@test.com", "password123", "applicant")
        .await;
    app.login("stale@test.com", "password123").await;
    assert_eq!(app.session_count("stale@test.com").await, 1);

    sqlx::query("UPDATE sessions SET expires_at = NOW() - INTERVAL '1 hour' WHERE email = $1")
        .bind("stale@test.com")
        .execute(&app.db_pool)
        .await
        .expect("Failed to age session");

    let registry = SessionRegistry::new(
        SessionRepository::new(app.db_pool.clone()),
        &app.config.session,
    );
    let purged = registry.purge_expired().await.expect("purge");

    assert_eq!(purged, 1);
    assert_eq!(app.session_count("stale@test.com").await, 0);
}

#[tokio::test]
async fn test_protected_route_without_token_is_401() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/users/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_403() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/users/profile", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
