use axum::http::StatusCode;

use local_library::models::InstanceStatus;

use crate::common::app;

#[tokio::test]
async fn test_create_with_missing_title_rerenders() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;

    let response = app
        .post(
            "/catalog/book/create",
            &format!("title=&author={}&summary=Spice&isbn=9780441172719", author.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Title must not be empty."));
    // Choices are offered again, with the submitted author selected
    assert!(response.body.contains("Herbert, Frank"));
    assert!(response.body.contains(" selected"));
    assert_eq!(app.repository.books.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_repeated_genres() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let sf = app.genre("Science Fiction").await;
    let classic = app.genre("Classic").await;

    let response = app
        .post(
            "/catalog/book/create",
            &format!(
                "title=Dune&author={}&summary=Spice&isbn=9780441172719&genre={}&genre={}",
                author.id, sf.id, classic.id
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let books = app.repository.books.list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(response.location, Some(format!("/catalog/book/{}", books[0].id)));
    assert_eq!(books[0].genres, vec![sf.id, classic.id]);
}

#[tokio::test]
async fn test_create_with_bad_author_reference() {
    let app = app();

    let response = app
        .post(
            "/catalog/book/create",
            "title=Dune&author=herbert&summary=Spice&isbn=9780441172719",
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Author must be a valid identifier."));
}

#[tokio::test]
async fn test_detail_resolves_author_genres_and_copies() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let sf = app.genre("Science Fiction").await;
    let book = app.book("Dune", &author, &[&sf]).await;
    app.copy(&book, InstanceStatus::Available).await;

    let response = app.get(&format!("/catalog/book/{}", book.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Herbert, Frank"));
    assert!(response.body.contains("Science Fiction"));
    assert!(response.body.contains("First edition"));
}

#[tokio::test]
async fn test_update_preserves_identifier() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;

    let form = app.get(&format!("/catalog/book/{}/update", book.id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("value=\"Dune\""));

    let response = app
        .post(
            &format!("/catalog/book/{}/update", book.id),
            &format!("title=Dune+Messiah&author={}&summary=Sequel&isbn=9780593098233", author.id),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(format!("/catalog/book/{}", book.id)));
    let stored = app.repository.books.get(book.id).await.unwrap();
    assert_eq!(stored.title, "Dune Messiah");
    assert!(stored.genres.is_empty());
    assert_eq!(app.repository.books.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_blocked_while_copies_exist() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    let book = app.book("Dune", &author, &[]).await;
    let copy = app.copy(&book, InstanceStatus::Loaned).await;

    let refused = app.post(&format!("/catalog/book/{}/delete", book.id), "").await;
    assert_eq!(refused.status, StatusCode::CONFLICT);
    assert!(refused.body.contains("First edition"));
    assert_eq!(app.repository.books.count().await.unwrap(), 1);

    app.repository.book_instances.delete(copy.id).await.unwrap();

    let deleted = app.post(&format!("/catalog/book/{}/delete", book.id), "").await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/books"));
    assert_eq!(app.repository.books.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_shows_books_with_missing_authors() {
    let app = app();
    let author = app.author("Frank", "Herbert").await;
    app.book("Dune", &author, &[]).await;
    app.repository.authors.delete(author.id).await.unwrap();

    let response = app.get("/catalog/books").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Dune"));
    assert!(!response.body.contains("Herbert"));
}
