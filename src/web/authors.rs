//! Author pages

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Serialize;

use super::parse_id;
use crate::{
    error::AppResult,
    forms::{AuthorForm, FieldError},
    models::{detail_url, list_url, Author, Book},
    services::{DeleteOutcome, WithDependents},
    views::{AuthorView, BookView},
    AppState,
};

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    authors: Vec<AuthorView>,
}

/// Detail and delete pages: the author and their books
#[derive(Serialize)]
struct AuthorPage {
    title: &'static str,
    author: AuthorView,
    books: Vec<BookView>,
}

#[derive(Serialize)]
struct FormPage<'a> {
    title: &'static str,
    form: &'a AuthorForm,
    errors: &'a [FieldError],
}

pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.authors.list().await?;
    state.views.render(
        "author_list.html",
        &ListPage {
            title: "Author List",
            authors: authors.iter().map(AuthorView::from).collect(),
        },
    )
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.authors.detail(parse_id(&id)?).await?;
    render_author(&state, "author_detail.html", "Author Detail", &detail)
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, "Create Author", &AuthorForm::default(), &[])
}

pub async fn create(State(state): State<AppState>, Form(form): Form<AuthorForm>) -> AppResult<Response> {
    let form = form.trimmed();
    let author = match form.validated() {
        Ok(author) => author,
        Err(errors) => return invalid(&state, "Create Author", &form, &errors),
    };

    let created = state.services.authors.create(&author).await?;
    Ok(Redirect::to(&detail_url::<Author>(created.id)).into_response())
}

pub async fn update_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let author = state.services.authors.get(parse_id(&id)?).await?;
    render_form(&state, "Update Author", &AuthorForm::from(&author.data), &[])
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.services.authors.get(id).await?;
    let form = form.trimmed();
    let author = match form.validated() {
        Ok(author) => author,
        Err(errors) => return invalid(&state, "Update Author", &form, &errors),
    };

    let updated = state.services.authors.update(id, &author).await?;
    Ok(Redirect::to(&detail_url::<Author>(updated.id)).into_response())
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.authors.detail(parse_id(&id)?).await?;
    render_author(&state, "author_delete.html", "Delete Author", &detail)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    match state.services.authors.delete(parse_id(&id)?).await? {
        DeleteOutcome::Deleted => Ok(Redirect::to(&list_url::<Author>()).into_response()),
        DeleteOutcome::Blocked(detail) => {
            let page = render_author(&state, "author_delete.html", "Delete Author", &detail)?;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
    }
}

fn render_author(
    state: &AppState,
    template: &str,
    title: &'static str,
    detail: &WithDependents<Author, Book>,
) -> AppResult<Html<String>> {
    state.views.render(
        template,
        &AuthorPage {
            title,
            author: AuthorView::from(&detail.record),
            books: detail.dependents.iter().map(BookView::from).collect(),
        },
    )
}

fn render_form(
    state: &AppState,
    title: &'static str,
    form: &AuthorForm,
    errors: &[FieldError],
) -> AppResult<Html<String>> {
    state.views.render("author_form.html", &FormPage { title, form, errors })
}

fn invalid(
    state: &AppState,
    title: &'static str,
    form: &AuthorForm,
    errors: &[FieldError],
) -> AppResult<Response> {
    let page = render_form(state, title, form, errors)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}
