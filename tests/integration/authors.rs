use axum::http::StatusCode;
use uuid::Uuid;

use crate::common::app;

#[tokio::test]
async fn test_create_with_missing_first_name_rerenders() {
    let app = app();

    let response = app
        .post("/catalog/author/create", "first_name=&family_name=Shelley")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("First name must be specified."));
    assert!(response.body.contains("value=\"Shelley\""));
    assert_eq!(app.repository.authors.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_redirects_to_detail() {
    let app = app();

    let response = app
        .post(
            "/catalog/author/create",
            "first_name=+Mary+&family_name=Shelley&date_of_birth=1797-08-30&date_of_death=",
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let authors = app.repository.authors.list().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].first_name, "Mary");
    assert_eq!(
        response.location,
        Some(format!("/catalog/author/{}", authors[0].id))
    );

    let detail = app.get(&format!("/catalog/author/{}", authors[0].id)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Shelley, Mary"));
    assert!(detail.body.contains("1797-08-30"));
}

#[tokio::test]
async fn test_update_preserves_identifier() {
    let app = app();
    let author = app.author("Isaac", "Asimov").await;

    let form = app.get(&format!("/catalog/author/{}/update", author.id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"Asimov\""));

    let response = app
        .post(
            &format!("/catalog/author/{}/update", author.id),
            "first_name=Isaac&family_name=Azimov&date_of_birth=1920-01-02",
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location,
        Some(format!("/catalog/author/{}", author.id))
    );
    let stored = app.repository.authors.get(author.id).await.unwrap();
    assert_eq!(stored.family_name, "Azimov");
    assert_eq!(app.repository.authors.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_update_keeps_record() {
    let app = app();
    let author = app.author("Isaac", "Asimov").await;

    let response = app
        .post(
            &format!("/catalog/author/{}/update", author.id),
            "first_name=Isaac&family_name=Asimov&date_of_birth=yesterday",
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Invalid date of birth."));
    let stored = app.repository.authors.get(author.id).await.unwrap();
    assert_eq!(stored.date_of_birth, None);
}

#[tokio::test]
async fn test_delete_blocked_while_books_exist() {
    let app = app();
    let author = app.author("Jane", "Austen").await;
    let book = app.book("Persuasion", &author, &[]).await;

    let page = app.get(&format!("/catalog/author/{}/delete", author.id)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Persuasion"));

    let refused = app
        .post(&format!("/catalog/author/{}/delete", author.id), "")
        .await;
    assert_eq!(refused.status, StatusCode::CONFLICT);
    assert!(refused.body.contains("Persuasion"));
    assert!(app.repository.authors.find_by_id(author.id).await.unwrap().is_some());

    app.repository.books.delete(book.id).await.unwrap();

    let deleted = app
        .post(&format!("/catalog/author/{}/delete", author.id), "")
        .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/authors"));
    assert_eq!(app.repository.authors.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_is_sorted_by_family_name() {
    let app = app();
    app.author("Virginia", "Woolf").await;
    app.author("Chinua", "Achebe").await;

    let response = app.get("/catalog/authors").await;
    assert_eq!(response.status, StatusCode::OK);
    let achebe = response.body.find("Achebe, Chinua").unwrap();
    let woolf = response.body.find("Woolf, Virginia").unwrap();
    assert!(achebe < woolf);
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let app = app();

    let missing = app.get(&format!("/catalog/author/{}", Uuid::new_v4())).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app.get("/catalog/author/not-an-id").await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);

    let update = app
        .post(
            &format!("/catalog/author/{}/update", Uuid::new_v4()),
            "first_name=Ghost&family_name=Writer",
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_update_of_missing_record_is_not_found() {
    let app = app();
    let submissions = [
        ("author", "first_name=&family_name=Writer"),
        ("genre", "name=SF"),
        ("book", "title="),
        ("bookinstance", "book=&imprint="),
    ];

    for (entity, form) in submissions {
        let response = app
            .post(&format!("/catalog/{}/{}/update", entity, Uuid::new_v4()), form)
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", entity);
    }
}

#[tokio::test]
async fn test_stored_text_is_escaped() {
    let app = app();
    let author = app.author("<b>Bold</b>", "Smith").await;

    let response = app.get(&format!("/catalog/author/{}", author.id)).await;
    assert!(response.body.contains("&lt;b&gt;Bold&lt;"));
    assert!(!response.body.contains("<b>Bold</b>"));
}
