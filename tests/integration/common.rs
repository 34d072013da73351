//! Shared test harness

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use local_library::{
    config::AppConfig,
    models::{Author, Book, BookInstance, Genre, InstanceStatus, Record},
    repository::Repository,
    store::MemoryDocumentStore,
    web, AppState,
};

pub struct TestApp {
    pub router: Router,
    /// Direct access to the same store the router uses
    pub repository: Repository,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub fn app() -> TestApp {
    app_in("development")
}

pub fn app_in(environment: &str) -> TestApp {
    let mut config = AppConfig::default();
    config.app.environment = environment.to_string();

    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState::new(config, store.clone()).unwrap();
    TestApp {
        router: web::router(state),
        repository: Repository::new(store),
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// POST an urlencoded form body
    pub async fn post(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn author(&self, first_name: &str, family_name: &str) -> Record<Author> {
        self.repository
            .authors
            .create(&Author {
                first_name: first_name.to_string(),
                family_name: family_name.to_string(),
                date_of_birth: None,
                date_of_death: None,
            })
            .await
            .unwrap()
    }

    pub async fn genre(&self, name: &str) -> Record<Genre> {
        self.repository
            .genres
            .create(&Genre {
                name: name.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn book(&self, title: &str, author: &Record<Author>, genres: &[&Record<Genre>]) -> Record<Book> {
        self.repository
            .books
            .create(&Book {
                title: title.to_string(),
                author: author.id,
                summary: format!("Summary of {}", title),
                isbn: "9780000000000".to_string(),
                genres: genres.iter().map(|g| g.id).collect(),
            })
            .await
            .unwrap()
    }

    pub async fn copy(&self, book: &Record<Book>, status: InstanceStatus) -> Record<BookInstance> {
        self.repository
            .book_instances
            .create(&BookInstance {
                book: book.id,
                imprint: "First edition".to_string(),
                status,
                due_back: None,
            })
            .await
            .unwrap()
    }
}
