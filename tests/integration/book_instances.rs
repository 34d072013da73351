use axum::http::StatusCode;
use chrono::{Local, NaiveDate};

use local_library::models::InstanceStatus;

use crate::common::app;

#[tokio::test]
async fn test_create_form_defaults() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    app.book("Dune", &author, &[]).await;

    let response = app.get("/catalog/bookinstance/create").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Dune"));
    assert!(response.body.contains("value=\"Maintenance\" selected"));
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(response.body.contains(&today));
}

#[tokio::test]
async fn test_create_with_missing_imprint_rerenders() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;

    let response = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=&status=Available&due_back=", book.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Imprint must be specified."));
    assert_eq!(app.repository.book_instances.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_unknown_status_rerenders() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;

    let response = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Ace&status=Lost&due_back=", book.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response
        .body
        .contains("Status must be one of Available, Maintenance, Loaned, Reserved."));
}

#[tokio::test]
async fn test_create_applies_defaults_and_redirects() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;

    let response = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Ace%2C+1990&status=&due_back=", book.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let copies = app.repository.book_instances.list().await.unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(
        response.location,
        Some(format!("/catalog/bookinstance/{}", copies[0].id))
    );
    assert_eq!(copies[0].imprint, "Ace, 1990");
    assert_eq!(copies[0].status, InstanceStatus::Maintenance);
    assert_eq!(copies[0].due_back, Some(Local::now().date_naive()));
}

#[tokio::test]
async fn test_update_preserves_identifier() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;
    let copy = app.copy(&book, InstanceStatus::Maintenance).await;

    let response = app
        .post(
            &format!("/catalog/bookinstance/{}/update", copy.id),
            &format!("book={}&imprint=Ace&status=Loaned&due_back=2026-12-24", book.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location,
        Some(format!("/catalog/bookinstance/{}", copy.id))
    );
    let stored = app.repository.book_instances.get(copy.id).await.unwrap();
    assert_eq!(stored.status, InstanceStatus::Loaned);
    assert_eq!(stored.due_back, NaiveDate::from_ymd_opt(2026, 12, 24));

    let detail = app.get(&format!("/catalog/bookinstance/{}", copy.id)).await;
    assert!(detail.body.contains("Dec 24, 2026"));
}

#[tokio::test]
async fn test_list_resolves_book_titles() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;
    app.copy(&book, InstanceStatus::Available).await;

    let response = app.get("/catalog/bookinstances").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Dune : First edition"));
}

#[tokio::test]
async fn test_delete_redirects_to_list() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;
    let copy = app.copy(&book, InstanceStatus::Reserved).await;

    let page = app.get(&format!("/catalog/bookinstance/{}/delete", copy.id)).await;
    assert_eq!(page.status, StatusCode::OK);

    let response = app
        .post(&format!("/catalog/bookinstance/{}/delete", copy.id), "")
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog/bookinstances"));
    assert_eq!(app.repository.book_instances.count().await.unwrap(), 0);
}
