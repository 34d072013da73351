use axum::http::StatusCode;

use crate::common::app;

#[tokio::test]
async fn test_duplicate_genre_is_reported_not_created() {
    let app = app();

    let first = app.post("/catalog/genre/create", "name=Fiction").await;
    assert_eq!(first.status, StatusCode::SEE_OTHER);
    let fiction = app
        .repository
        .genres
        .find_by_name("Fiction")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.location, Some(format!("/catalog/genre/{}", fiction.id)));

    let second = app.post("/catalog/genre/create", "name=+Fiction+").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.body.contains("already been created"));
    assert!(second.body.contains(&fiction.id.to_string()));
    assert_eq!(app.repository.genres.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_with_missing_name_rerenders() {
    let app = app();

    let response = app.post("/catalog/genre/create", "name=").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Genre name required."));
    assert_eq!(app.repository.genres.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_short_name_is_rejected() {
    let app = app();

    let response = app.post("/catalog/genre/create", "name=SF").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response
        .body
        .contains("Genre name must be between 3 and 100 characters."));
}

#[tokio::test]
async fn test_detail_lists_tagged_books() {
    let app = app();
    let author = app.author("Ursula", "LeGuin").await;
    let fantasy = app.genre("Fantasy").await;
    app.book("A Wizard of Earthsea", &author, &[&fantasy]).await;
    app.book("The Dispossessed", &author, &[]).await;

    let response = app.get(&format!("/catalog/genre/{}", fantasy.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("A Wizard of Earthsea"));
    assert!(!response.body.contains("The Dispossessed"));
}

#[tokio::test]
async fn test_update_preserves_identifier() {
    let app = app();
    let genre = app.genre("Poetyr").await;

    let response = app
        .post(&format!("/catalog/genre/{}/update", genre.id), "name=Poetry")
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(format!("/catalog/genre/{}", genre.id)));
    assert_eq!(app.repository.genres.get(genre.id).await.unwrap().name, "Poetry");
}

#[tokio::test]
async fn test_delete_blocked_while_books_exist() {
    let app = app();
    let author = app.author("Mary", "Shelley").await;
    let horror = app.genre("Horror").await;
    let book = app.book("Frankenstein", &author, &[&horror]).await;

    let refused = app
        .post(&format!("/catalog/genre/{}/delete", horror.id), "")
        .await;
    assert_eq!(refused.status, StatusCode::CONFLICT);
    assert!(refused.body.contains("Frankenstein"));
    assert_eq!(app.repository.genres.count().await.unwrap(), 1);

    app.repository.books.delete(book.id).await.unwrap();

    let deleted = app
        .post(&format!("/catalog/genre/{}/delete", horror.id), "")
        .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/genres"));
    assert_eq!(app.repository.genres.count().await.unwrap(), 0);
}
