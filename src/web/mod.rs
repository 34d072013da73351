//! HTTP routing and request handlers
//!
//! Every entity follows the same shape: a GET renders a page or a form, a
//! POST validates the submission and either redirects or re-renders.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod health;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, ErrorPage},
    AppState,
};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog/") }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Dashboard
        .route("/catalog", get(catalog::index))
        .route("/catalog/", get(catalog::index))
        // Authors
        .route("/catalog/authors", get(authors::list))
        .route("/catalog/author/create", get(authors::create_form).post(authors::create))
        .route("/catalog/author/:id", get(authors::detail))
        .route("/catalog/author/:id/update", get(authors::update_form).post(authors::update))
        .route("/catalog/author/:id/delete", get(authors::delete_form).post(authors::delete))
        // Books
        .route("/catalog/books", get(books::list))
        .route("/catalog/book/create", get(books::create_form).post(books::create))
        .route("/catalog/book/:id", get(books::detail))
        .route("/catalog/book/:id/update", get(books::update_form).post(books::update))
        .route("/catalog/book/:id/delete", get(books::delete_form).post(books::delete))
        // Genres
        .route("/catalog/genres", get(genres::list))
        .route("/catalog/genre/create", get(genres::create_form).post(genres::create))
        .route("/catalog/genre/:id", get(genres::detail))
        .route("/catalog/genre/:id/update", get(genres::update_form).post(genres::update))
        .route("/catalog/genre/:id/delete", get(genres::delete_form).post(genres::delete))
        // Book instances
        .route("/catalog/bookinstances", get(book_instances::list))
        .route(
            "/catalog/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create),
        )
        .route("/catalog/bookinstance/:id", get(book_instances::detail))
        .route(
            "/catalog/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update),
        )
        .route(
            "/catalog/bookinstance/:id/delete",
            get(book_instances::delete_form).post(book_instances::delete),
        )
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), render_error_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a path identifier; anything malformed is treated as a missing record
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("No record with id {}", raw)))
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

#[derive(Serialize)]
struct ErrorView {
    title: &'static str,
    status: u16,
    message: String,
    detail: Option<String>,
}

/// Replace error responses with the rendered error page
async fn render_error_page(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let view = ErrorView {
        title: page.status.canonical_reason().unwrap_or("Error"),
        status: page.status.as_u16(),
        message: page.message,
        detail: state.config.app.is_development().then_some(page.detail),
    };

    match state.views.render("error.html", &view) {
        Ok(html) => (page.status, html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {:?}", e);
            response
        }
    }
}
