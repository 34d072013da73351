//! Book pages

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
    forms::{BookForm, FieldError},
    models::{author, detail_url, list_url, Book, BookInstance},
    services::{books::BookChoices, DeleteOutcome, WithDependents},
    views::{BookView, Choice, GenreView, InstanceView},
    AppState,
};

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    books: Vec<BookView>,
}

#[derive(Serialize)]
struct DetailPage {
    title: String,
    book: BookView,
    genres: Vec<GenreView>,
    instances: Vec<InstanceView>,
}

#[derive(Serialize)]
struct DeletePage {
    title: &'static str,
    book: BookView,
    instances: Vec<InstanceView>,
}

#[derive(Serialize)]
struct FormPage<'a> {
    title: &'static str,
    form: &'a BookForm,
    errors: &'a [FieldError],
    authors: Vec<Choice>,
    genres: Vec<Choice>,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    state.views.render(
        "book_list.html",
        &ListPage {
            title: "Book List",
            books: books
                .iter()
                .map(|s| BookView::new(&s.book, s.author.as_ref()))
                .collect(),
        },
    )
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.books.detail(parse_id(&id)?).await?;
    state.views.render(
        "book_detail.html",
        &DetailPage {
            title: detail.book.title.clone(),
            book: BookView::new(&detail.book, detail.author.as_ref()),
            genres: detail.genres.iter().map(GenreView::from).collect(),
            instances: detail.instances.iter().map(InstanceView::from).collect(),
        },
    )
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let choices = state.services.books.choices().await?;
    render_form(&state, "Create Book", &BookForm::default(), &[], &choices)
}

pub async fn create(State(state): State<AppState>, Form(form): Form<BookForm>) -> AppResult<Response> {
    let form = form.trimmed();
    let book = match form.validated() {
        Ok(book) => book,
        Err(errors) => return invalid(&state, "Create Book", &form, &errors).await,
    };

    let created = state.services.books.create(&book).await?;
    Ok(Redirect::to(&detail_url::<Book>(created.id)).into_response())
}

pub async fn update_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let (book, choices) = state.services.books.edit(parse_id(&id)?).await?;
    render_form(&state, "Update Book", &BookForm::from(&book.data), &[], &choices)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.services.books.get(id).await?;
    let form = form.trimmed();
    let book = match form.validated() {
        Ok(book) => book,
        Err(errors) => return invalid(&state, "Update Book", &form, &errors).await,
    };

    let updated = state.services.books.update(id, &book).await?;
    Ok(Redirect::to(&detail_url::<Book>(updated.id)).into_response())
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.books.with_instances(parse_id(&id)?).await?;
    render_delete(&state, &detail)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    match state.services.books.delete(parse_id(&id)?).await? {
        DeleteOutcome::Deleted => Ok(Redirect::to(&list_url::<Book>()).into_response()),
        DeleteOutcome::Blocked(detail) => {
            let page = render_delete(&state, &detail)?;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
    }
}

fn render_delete(
    state: &AppState,
    detail: &WithDependents<Book, BookInstance>,
) -> AppResult<Html<String>> {
    state.views.render(
        "book_delete.html",
        &DeletePage {
            title: "Delete Book",
            book: BookView::from(&detail.record),
            instances: detail.dependents.iter().map(InstanceView::from).collect(),
        },
    )
}

fn render_form(
    state: &AppState,
    title: &'static str,
    form: &BookForm,
    errors: &[FieldError],
    choices: &BookChoices,
) -> AppResult<Html<String>> {
    let authors = choices
        .authors
        .iter()
        .map(|a| Choice::new(a.id, author::full_name(a), form.author == a.id.to_string()))
        .collect();
    let genres = choices
        .genres
        .iter()
        .map(|g| Choice::new(g.id, g.name.clone(), form.has_genre(&g.id.to_string())))
        .collect();

    state.views.render(
        "book_form.html",
        &FormPage {
            title,
            form,
            errors,
            authors,
            genres,
        },
    )
}

/// Re-render a rejected submission with fresh choice lists
async fn invalid(
    state: &AppState,
    title: &'static str,
    form: &BookForm,
    errors: &[FieldError],
) -> AppResult<Response> {
    let choices = state.services.books.choices().await?;
    let page = render_form(state, title, form, errors, &choices)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}
