//! Integration tests for account self-service: profile, password,
//! bookmarks, applications, and cascade deletion.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_profile_never_exposes_password_hash() {
    let app = helpers::TestApp::new().await;
    app.register("hash@test.com", "password123", "applicant")
        .await;
    let token = app.login("hash@test.com", "password123").await;

    let response = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let serialized = response.body.to_string();
    assert!(!serialized.contains("password"));
}

#[tokio::test]
async fn test_update_profile_email_conflict_is_409() {
    let app = helpers::TestApp::new().await;
    app.register("taken@test.com", "password123", "applicant")
        .await;
    app.register("mover@test.com", "password123", "applicant")
        .await;
    let token = app.login("mover@test.com", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/users/profile",
            Some(serde_json::json!({
                "first_name": "Test",
                "last_name": "Account",
                "email": "taken@test.com",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_change_password_requires_current() {
    let app = helpers::TestApp::new().await;
    app.register("pw@test.com", "password123", "applicant")
        .await;
    let token = app.login("pw@test.com", "password123").await;

    let wrong = app
        .request(
            "PUT",
            "/api/users/password",
            Some(serde_json::json!({
                "current_password": "not-this",
                "new_password": "newpassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::FORBIDDEN);

    let right = app
        .request(
            "PUT",
            "/api/users/password",
            Some(serde_json::json!({
                "current_password": "password123",
                "new_password": "newpassword1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(right.status, StatusCode::OK);

    app.login("pw@test.com", "newpassword1").await;
}

#[tokio::test]
async fn test_bookmark_toggle_is_symmetric() {
    let app = helpers::TestApp::new().await;
    app.register("boss@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("boss@test.com", "password123").await;
    app.register("seeker@test.com", "password123", "applicant")
        .await;
    let token = app.login("seeker@test.com", "password123").await;

    let job = app
        .request(
            "POST",
            "/api/employers/jobs",
            Some(serde_json::json!({
                "title": "Welder",
                "description": "Welding things",
                "location": "Tallinn",
            })),
            Some(&employer_token),
        )
        .await;
    let job_id = job.body["data"]["id"].as_str().unwrap().to_string();

    let first = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/bookmark"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["bookmarked"], true);

    let second = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/bookmark"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(second.body["data"]["bookmarked"], false);

    let bookmarks = app
        .request("GET", "/api/users/bookmarks", None, Some(&token))
        .await;
    assert_eq!(bookmarks.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_application_is_409() {
    let app = helpers::TestApp::new().await;
    app.register("hirer@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("hirer@test.com", "password123").await;
    app.register("eager@test.com", "password123", "applicant")
        .await;
    let token = app.login("eager@test.com", "password123").await;

    let job = app
        .request(
            "POST",
            "/api/employers/jobs",
            Some(serde_json::json!({
                "title": "Baker",
                "description": "Baking bread",
                "location": "Tartu",
            })),
            Some(&employer_token),
        )
        .await;
    let job_id = job.body["data"]["id"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "resume": "I bake." });
    let first = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/apply"),
            Some(body.clone()),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/apply"),
            Some(body),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_profile_applications_hold_job_ids() {
    let app = helpers::TestApp::new().await;
    app.register("foundry@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("foundry@test.com", "password123").await;
    app.register("caster@test.com", "password123", "applicant")
        .await;
    let token = app.login("caster@test.com", "password123").await;

    let job = app
        .request(
            "POST",
            "/api/employers/jobs",
            Some(serde_json::json!({
                "title": "Caster",
                "description": "Pouring bronze",
                "location": "Pärnu",
            })),
            Some(&employer_token),
        )
        .await;
    let job_id = job.body["data"]["id"].as_str().unwrap().to_string();

    app.request(
        "POST",
        &format!("/api/users/jobs/{job_id}/apply"),
        Some(serde_json::json!({ "resume": "I cast." })),
        Some(&token),
    )
    .await;

    let profile = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);

    // The applicant profile references the jobs applied to, not the
    // application rows.
    let applications = profile.body["data"]["profile"]["applications"]
        .as_array()
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].as_str().unwrap(), job_id);
}

#[tokio::test]
async fn test_deleted_account_token_is_401() {
    let app = helpers::TestApp::new().await;
    app.register("ghost@test.com", "password123", "applicant")
        .await;
    let token = app.login("ghost@test.com", "password123").await;

    let deleted = app
        .request(
            "DELETE",
            "/api/users/profile",
            Some(serde_json::json!({ "password": "password123" })),
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let after = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_gates_are_exact() {
    let app = helpers::TestApp::new().await;
    app.register("strict@test.com", "password123", "employer")
        .await;
    let token = app.login("strict@test.com", "password123").await;

    // Employers cannot use applicant-only routes.
    let bookmarks = app
        .request("GET", "/api/users/bookmarks", None, Some(&token))
        .await;
    assert_eq!(bookmarks.status, StatusCode::FORBIDDEN);

    // Or admin routes.
    let accounts = app
        .request("GET", "/api/admin/accounts", None, Some(&token))
        .await;
    assert_eq!(accounts.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_account_requires_password() {
    let app = helpers::TestApp::new().await;
    app.register("careful@test.com", "password123", "applicant")
        .await;
    let token = app.login("careful@test.com", "password123").await;

    let wrong = app
        .request(
            "DELETE",
            "/api/users/profile",
            Some(serde_json::json!({ "password": "not-this" })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::FORBIDDEN);

    // Account survives a failed attempt.
    let profile = app
        .request("GET", "/api/users/profile", None, Some(&token))
        .await;
    assert_eq!(profile.status, StatusCode::OK);
}

#[tokio::test]
async fn test_withdraw_application() {
    let app = helpers::TestApp::new().await;
    app.register("boss@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("boss@test.com", "password123").await;
    app.register("waverer@test.com", "password123", "applicant")
        .await;
    let token = app.login("waverer@test.com", "password123").await;

    let job = app
        .request(
            "POST",
            "/api/employers/jobs",
            Some(serde_json::json!({
                "title": "Clerk",
                "description": "Filing papers",
                "location": "Narva",
            })),
            Some(&employer_token),
        )
        .await;
    let job_id = job.body["data"]["id"].as_str().unwrap().to_string();

    let applied = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/apply"),
            Some(serde_json::json!({ "resume": "I file." })),
            Some(&token),
        )
        .await;
    assert_eq!(applied.status, StatusCode::CREATED);
    let application_id = applied.body["data"]["id"].as_str().unwrap().to_string();

    let withdrawn = app
        .request(
            "DELETE",
            &format!("/api/users/applications/{application_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(withdrawn.status, StatusCode::OK);

    let mine = app
        .request("GET", "/api/users/applications", None, Some(&token))
        .await;
    assert_eq!(mine.body["data"].as_array().unwrap().len(), 0);

    // Withdrawing again finds nothing.
    let again = app
        .request(
            "DELETE",
            &format!("/api/users/applications/{application_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
