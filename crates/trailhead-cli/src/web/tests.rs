//! Tests for the HTTP routes, driven through the router without a socket.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;
use trailhead_core::{params::ImportSeed, PlannerBuilder};

use super::{interrupt_or_pending, router, AppState};

/// Helper function to create a router over a seeded database
async fn create_test_app(student_id: &str) -> (TempDir, Router) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to create planner");

    let seed = json!({
        "classes": [
            {"_id": "CS101", "courseNumber": "CS 101", "creditHours": 3, "nextCourses": ["CS201"]},
            {"_id": "CS201", "courseNumber": "CS 201", "creditHours": 4, "nextCourses": ["CS301"]},
            {"_id": "CS301", "creditHours": 3, "nextCourses": []}
        ],
        "students": [
            {"studentId": "102899", "name": "Ada Lovelace", "coursesTaken": ["CS101"], "currentCourses": ["CS201"]}
        ]
    });
    let seed_path = temp_dir.path().join("seed.json");
    std::fs::write(&seed_path, seed.to_string()).expect("Failed to write seed");
    planner
        .import_seed(&ImportSeed { path: seed_path })
        .await
        .expect("Failed to import seed");

    (temp_dir, router(AppState::new(planner, student_id)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("Invalid UTF-8 body"))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("Failed to build request")
}

fn post_form(body: &str) -> Request<Body> {
    Request::post("/planner")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_index() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, body) = send(app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/planAhead"));
}

#[tokio::test]
async fn test_plan_ahead_page() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let response = app
        .oneshot(get("/planAhead"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/markdown; charset=utf-8"
    );

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).expect("Invalid UTF-8 body");
    assert!(body.contains("# Plan Ahead: Ada Lovelace"));
    assert!(body.contains("- Credits completed: 3"));
}

#[tokio::test]
async fn test_plan_ahead_unknown_student() {
    let (_temp_dir, app) = create_test_app("nobody").await;

    let (status, body) = send(app, get("/planAhead")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Student not found");
}

#[tokio::test]
async fn test_planner_page() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, body) = send(app, get("/planner")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("### After CS 201"));
    assert!(body.contains("**CS301** (3 credit hours)"));
    assert!(body.contains("- currentCourses: `[]`"));
}

#[tokio::test]
async fn test_planner_page_unknown_student() {
    let (_temp_dir, app) = create_test_app("nobody").await;

    let (status, _) = send(app, get("/planner")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_form_accumulates() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, body) = send(
        app,
        post_form("selectedCourses%5B%5D=CS301&currentCourses=%5B%22CS201%22%5D"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"- currentCourses: `["CS201","CS301"]`"#));
    assert!(body.contains("- Credits planned: 7"));
}

#[tokio::test]
async fn test_submit_json_accumulates() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let request = Request::post("/planner")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"selectedCourses": ["CS101"], "currentCourses": "[\"CS101\"]"}).to_string(),
        ))
        .expect("Failed to build request");
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"`["CS101","CS101"]`"#));
}

#[tokio::test]
async fn test_submit_scalar_selection_rejected() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, body) = send(app, post_form("selectedCourses=not-an-array")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid course selections"));
}

#[tokio::test]
async fn test_submit_missing_selection_rejected() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, _) = send(app, post_form("currentCourses=%5B%5D")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_malformed_current_courses_rejected() {
    let (_temp_dir, app) = create_test_app("102899").await;

    let (status, _) = send(
        app,
        post_form("selectedCourses%5B%5D=CS301&currentCourses=oops"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (temp_dir, app) = create_test_app("102899").await;
    // Clobber the database so every storage call fails.
    std::fs::write(temp_dir.path().join("test.db"), vec![b'x'; 4096])
        .expect("Failed to corrupt database");

    let (status, body) = send(app, get("/planAhead")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn test_failed_interrupt_listener_keeps_serving() {
    let failing = async { Err::<(), _>(std::io::Error::other("no signal driver")) };

    let outcome =
        tokio::time::timeout(Duration::from_millis(50), interrupt_or_pending(failing)).await;
    assert!(outcome.is_err(), "A failed listener must not trigger shutdown");
}

#[tokio::test]
async fn test_interrupt_resolves_shutdown() {
    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        interrupt_or_pending(async { Ok::<(), std::io::Error>(()) }),
    )
    .await;
    assert!(outcome.is_ok());
}
