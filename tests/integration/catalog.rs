use axum::http::StatusCode;
use serde_json::Value;

use local_library::models::InstanceStatus;

use crate::common::{app, app_in};

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let response = app().get("/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/"));
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;
    app.copy(&book, InstanceStatus::Available).await;
    app.copy(&book, InstanceStatus::Loaned).await;
    app.genre("Science Fiction").await;

    let response = app.get("/catalog/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<strong>Books:</strong> 1"));
    assert!(response.body.contains("<strong>Copies:</strong> 2"));
    assert!(response.body.contains("<strong>Copies available:</strong> 1"));
    assert!(response.body.contains("<strong>Authors:</strong> 1"));
    assert!(response.body.contains("<strong>Genres:</strong> 1"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let response = app().get("/catalog/unicorns").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("<html"));
    assert!(response.body.contains("Not Found"));
}

#[tokio::test]
async fn test_error_detail_only_in_development() {
    let development = app_in("development").get("/nowhere").await;
    assert!(development.body.contains("class=\"detail\""));

    let production = app_in("production").get("/nowhere").await;
    assert_eq!(production.status, StatusCode::NOT_FOUND);
    assert!(!production.body.contains("class=\"detail\""));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = app();

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&health.body).unwrap();
    assert_eq!(body["status"], "healthy");

    let ready = app.get("/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&ready.body).unwrap();
    assert_eq!(body["status"], "ready");
}
