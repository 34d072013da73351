//! Book instance (copy) pages

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
    forms::{BookInstanceForm, FieldError},
    models::{detail_url, list_url, Book, BookInstance, InstanceStatus, Record},
    services::book_instances::InstanceSummary,
    views::{Choice, InstanceView},
    AppState,
};

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    instances: Vec<InstanceView>,
}

#[derive(Serialize)]
struct InstancePage {
    title: &'static str,
    instance: InstanceView,
}

#[derive(Serialize)]
struct FormPage<'a> {
    title: &'static str,
    form: &'a BookInstanceForm,
    errors: &'a [FieldError],
    books: Vec<Choice>,
    statuses: Vec<Choice>,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let instances = state.services.book_instances.list().await?;
    state.views.render(
        "bookinstance_list.html",
        &ListPage {
            title: "Book Instance List",
            instances: instances.iter().map(summary_view).collect(),
        },
    )
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let summary = state.services.book_instances.detail(parse_id(&id)?).await?;
    state.views.render(
        "bookinstance_detail.html",
        &InstancePage {
            title: "Book Instance Detail",
            instance: summary_view(&summary),
        },
    )
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.book_instances.book_choices().await?;
    render_form(&state, "Create BookInstance", &BookInstanceForm::new_copy(), &[], &books)
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    let instance = match form.validated() {
        Ok(instance) => instance,
        Err(errors) => return invalid(&state, "Create BookInstance", &form, &errors).await,
    };

    let created = state.services.book_instances.create(&instance).await?;
    Ok(Redirect::to(&detail_url::<BookInstance>(created.id)).into_response())
}

pub async fn update_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let (instance, books) = state.services.book_instances.edit(parse_id(&id)?).await?;
    render_form(
        &state,
        "Update BookInstance",
        &BookInstanceForm::from(&instance.data),
        &[],
        &books,
    )
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.services.book_instances.get(id).await?;
    let form = form.trimmed();
    let instance = match form.validated() {
        Ok(instance) => instance,
        Err(errors) => return invalid(&state, "Update BookInstance", &form, &errors).await,
    };

    let updated = state.services.book_instances.update(id, &instance).await?;
    Ok(Redirect::to(&detail_url::<BookInstance>(updated.id)).into_response())
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let summary = state.services.book_instances.detail(parse_id(&id)?).await?;
    state.views.render(
        "bookinstance_delete.html",
        &InstancePage {
            title: "Delete BookInstance",
            instance: summary_view(&summary),
        },
    )
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    state.services.book_instances.delete(parse_id(&id)?).await?;
    Ok(Redirect::to(&list_url::<BookInstance>()).into_response())
}

fn summary_view(summary: &InstanceSummary) -> InstanceView {
    InstanceView::new(&summary.instance, summary.book.as_ref())
}

fn render_form(
    state: &AppState,
    title: &'static str,
    form: &BookInstanceForm,
    errors: &[FieldError],
    books: &[Record<Book>],
) -> AppResult<Html<String>> {
    let books = books
        .iter()
        .map(|b| Choice::new(b.id, b.title.clone(), form.book == b.id.to_string()))
        .collect();
    let statuses = InstanceStatus::ALL
        .iter()
        .map(|s| Choice::new(s, s.as_str(), form.status == s.as_str()))
        .collect();

    state.views.render(
        "bookinstance_form.html",
        &FormPage {
            title,
            form,
            errors,
            books,
            statuses,
        },
    )
}

async fn invalid(
    state: &AppState,
    title: &'static str,
    form: &BookInstanceForm,
    errors: &[FieldError],
) -> AppResult<Response> {
    let books = state.services.book_instances.book_choices().await?;
    let page = render_form(state, title, form, errors, &books)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}
