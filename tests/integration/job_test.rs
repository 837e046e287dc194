//! Integration tests for the job board: public listing, employer
//! ownership, and cascade deletes.

use http::StatusCode;

use crate::helpers;

async fn post_job(
    app: &helpers::TestApp,
    token: &str,
    title: &str,
) -> String {
    let job = app
        .request(
            "POST",
            "/api/employers/jobs",
            Some(serde_json::json!({
                "title": title,
                "description": "A fine position",
                "requirements": ["punctuality"],
                "location": "Narva",
            })),
            Some(token),
        )
        .await;
    assert_eq!(job.status, StatusCode::CREATED);
    job.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_job_listing_is_public() {
    let app = helpers::TestApp::new().await;
    app.register("lister@test.com", "password123", "employer")
        .await;
    let token = app.login("lister@test.com", "password123").await;
    post_job(&app, &token, "Clerk").await;

    let response = app.request("GET", "/api/jobs", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_job_ownership_gate() {
    let app = helpers::TestApp::new().await;
    app.register("owner@test.com", "password123", "employer")
        .await;
    app.register("rival@test.com", "password123", "employer")
        .await;
    let owner_token = app.login("owner@test.com", "password123").await;
    let rival_token = app.login("rival@test.com", "password123").await;
    let job_id = post_job(&app, &owner_token, "Pilot").await;

    let update = app
        .request(
            "PUT",
            &format!("/api/employers/jobs/{job_id}"),
            Some(serde_json::json!({ "title": "Co-pilot" })),
            Some(&rival_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/employers/jobs/{job_id}"),
            None,
            Some(&rival_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_job_delete_cascades_to_applications_and_bookmarks() {
    let app = helpers::TestApp::new().await;
    app.register("closer@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("closer@test.com", "password123").await;
    app.register("fan@test.com", "password123", "applicant")
        .await;
    let applicant_token = app.login("fan@test.com", "password123").await;
    let job_id = post_job(&app, &employer_token, "Archivist").await;

    app.request(
        "POST",
        &format!("/api/users/jobs/{job_id}/apply"),
        Some(serde_json::json!({ "resume": "I archive." })),
        Some(&applicant_token),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/users/jobs/{job_id}/bookmark"),
        None,
        Some(&applicant_token),
    )
    .await;

    let delete = app
        .request(
            "DELETE",
            &format!("/api/employers/jobs/{job_id}"),
            None,
            Some(&employer_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    let applications = app
        .request("GET", "/api/users/applications", None, Some(&applicant_token))
        .await;
    assert_eq!(applications.body["data"].as_array().unwrap().len(), 0);

    let bookmarks = app
        .request("GET", "/api/users/bookmarks", None, Some(&applicant_token))
        .await;
    assert_eq!(bookmarks.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_employer_delete_cascades_own_jobs() {
    let app = helpers::TestApp::new().await;
    app.register("leaver@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("leaver@test.com", "password123").await;
    post_job(&app, &employer_token, "Scribe").await;
    post_job(&app, &employer_token, "Courier").await;

    let delete = app
        .request(
            "DELETE",
            "/api/users/profile",
            Some(serde_json::json!({ "password": "password123" })),
            Some(&employer_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let listing = app.request("GET", "/api/jobs", None, None).await;
    assert_eq!(listing.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_application_status_flow() {
    let app = helpers::TestApp::new().await;
    app.register("review@test.com", "password123", "employer")
        .await;
    let employer_token = app.login("review@test.com", "password123").await;
    app.register("hopeful@test.com", "password123", "applicant")
        .await;
    let applicant_token = app.login("hopeful@test.com", "password123").await;
    let job_id = post_job(&app, &employer_token, "Surveyor").await;

    let applied = app
        .request(
            "POST",
            &format!("/api/users/jobs/{job_id}/apply"),
            Some(serde_json::json!({ "resume": "I survey." })),
            Some(&applicant_token),
        )
        .await;
    let application_id = applied.body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(applied.body["data"]["status"], "applied");

    let updated = app
        .request(
            "PUT",
            &format!("/api/employers/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "viewed" })),
            Some(&employer_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["status"], "viewed");
}

#[tokio::test]
async fn test_missing_job_is_404() {
    let app = helpers::TestApp::new().await;
    app.register("seeker2@test.com", "password123", "applicant")
        .await;
    let token = app.login("seeker2@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users/jobs/00000000-0000-0000-0000-000000000000/apply",
            Some(serde_json::json!({ "resume": "hello" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
