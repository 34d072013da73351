//! Genre pages

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
    forms::{FieldError, GenreForm},
    models::{detail_url, list_url, Book, Genre},
    services::{genres::GenreCreated, DeleteOutcome, WithDependents},
    views::{BookView, GenreView},
    AppState,
};

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    genres: Vec<GenreView>,
}

#[derive(Serialize)]
struct GenrePage {
    title: &'static str,
    genre: GenreView,
    books: Vec<BookView>,
}

#[derive(Serialize)]
struct FormPage<'a> {
    title: &'static str,
    form: &'a GenreForm,
    errors: &'a [FieldError],
    /// Set when creation was refused because the name is taken
    existing: Option<GenreView>,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let genres = state.services.genres.list().await?;
    state.views.render(
        "genre_list.html",
        &ListPage {
            title: "Genre List",
            genres: genres.iter().map(GenreView::from).collect(),
        },
    )
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.genres.detail(parse_id(&id)?).await?;
    render_genre(&state, "genre_detail.html", "Genre Detail", &detail)
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_form(&state, "Create Genre", &GenreForm::default(), &[], None)
}

pub async fn create(State(state): State<AppState>, Form(form): Form<GenreForm>) -> AppResult<Response> {
    let form = form.trimmed();
    let genre = match form.validated() {
        Ok(genre) => genre,
        Err(errors) => {
            let page = render_form(&state, "Create Genre", &form, &errors, None)?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    match state.services.genres.create(&genre).await? {
        GenreCreated::Created(created) => {
            Ok(Redirect::to(&detail_url::<Genre>(created.id)).into_response())
        }
        GenreCreated::Exists(existing) => {
            let page = render_form(
                &state,
                "Create Genre",
                &form,
                &[],
                Some(GenreView::from(&existing)),
            )?;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
    }
}

pub async fn update_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let genre = state.services.genres.get(parse_id(&id)?).await?;
    render_form(&state, "Update Genre", &GenreForm::from(&genre.data), &[], None)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.services.genres.get(id).await?;
    let form = form.trimmed();
    let genre = match form.validated() {
        Ok(genre) => genre,
        Err(errors) => {
            let page = render_form(&state, "Update Genre", &form, &errors, None)?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let updated = state.services.genres.update(id, &genre).await?;
    Ok(Redirect::to(&detail_url::<Genre>(updated.id)).into_response())
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let detail = state.services.genres.detail(parse_id(&id)?).await?;
    render_genre(&state, "genre_delete.html", "Delete Genre", &detail)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    match state.services.genres.delete(parse_id(&id)?).await? {
        DeleteOutcome::Deleted => Ok(Redirect::to(&list_url::<Genre>()).into_response()),
        DeleteOutcome::Blocked(detail) => {
            let page = render_genre(&state, "genre_delete.html", "Delete Genre", &detail)?;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
    }
}

fn render_genre(
    state: &AppState,
    template: &str,
    title: &'static str,
    detail: &WithDependents<Genre, Book>,
) -> AppResult<Html<String>> {
    state.views.render(
        template,
        &GenrePage {
            title,
            genre: GenreView::from(&detail.record),
            books: detail.dependents.iter().map(BookView::from).collect(),
        },
    )
}

fn render_form(
    state: &AppState,
    title: &'static str,
    form: &GenreForm,
    errors: &[FieldError],
    existing: Option<GenreView>,
) -> AppResult<Html<String>> {
    state.views.render(
        "genre_form.html",
        &FormPage {
            title,
            form,
            errors,
            existing,
        },
    )
}
