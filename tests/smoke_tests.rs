//! End-to-end flow a front end walks through.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn smoke_register_post_browse_apply() {
    let app = spawn_app().await;

    let (status, _) = app
        .post_json(
            "/api/register",
            json!({"username": "a", "email": "a@x.com", "password": "pw"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .post_json(
            "/api/jobs",
            json!({
                "title": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "description": "...",
                "user_id": 1,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/jobs").await;
    assert_eq!(status, StatusCode::OK);
    let jobs = body.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Engineer");
    assert_eq!(jobs[0]["id"], 1);

    let (status, _) = app
        .post_json("/api/applications", json!({"job_id": 1, "user_id": 1}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/applications/1").await;
    assert_eq!(status, StatusCode::OK);
    let apps = body.as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0]["status"], "pending");
    assert_eq!(apps[0]["job_id"], 1);
}

#[tokio::test]
async fn smoke_responses_carry_security_headers() {
    let app = spawn_app().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        axum::http::Request::builder()
            .uri("/api/jobs")
            .header("Origin", "http://example.com")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn smoke_request_id_is_echoed() {
    let app = spawn_app().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        axum::http::Request::builder()
            .uri("/api/jobs")
            .header("x-request-id", "trace-42")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-42");

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        axum::http::Request::builder()
            .uri("/api/jobs")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    let minted = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok());
}
