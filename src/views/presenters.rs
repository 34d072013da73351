//! Template-facing views of stored records, with derived fields filled in

use serde::Serialize;

use crate::models::{
    author, book_instance, detail_url, Author, Book, BookInstance, Genre, Record,
};

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: String,
    pub url: String,
    pub name: String,
    pub first_name: String,
    pub family_name: String,
    pub birthday: String,
    pub death: String,
    pub lifespan: String,
}

impl From<&Record<Author>> for AuthorView {
    fn from(record: &Record<Author>) -> Self {
        Self {
            id: record.id.to_string(),
            url: detail_url::<Author>(record.id),
            name: author::full_name(record),
            first_name: record.first_name.clone(),
            family_name: record.family_name.clone(),
            birthday: author::birthday(record),
            death: author::death(record),
            lifespan: author::lifespan(record),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreView {
    pub id: String,
    pub url: String,
    pub name: String,
}

impl From<&Record<Genre>> for GenreView {
    fn from(record: &Record<Genre>) -> Self {
        Self {
            id: record.id.to_string(),
            url: detail_url::<Genre>(record.id),
            name: record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub id: String,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author: Option<AuthorView>,
}

impl BookView {
    pub fn new(record: &Record<Book>, author: Option<&Record<Author>>) -> Self {
        Self {
            id: record.id.to_string(),
            url: detail_url::<Book>(record.id),
            title: record.title.clone(),
            summary: record.summary.clone(),
            isbn: record.isbn.clone(),
            author: author.map(AuthorView::from),
        }
    }
}

impl From<&Record<Book>> for BookView {
    fn from(record: &Record<Book>) -> Self {
        Self::new(record, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceView {
    pub id: String,
    pub url: String,
    pub imprint: String,
    pub status: String,
    pub due_back: String,
    pub book: Option<BookView>,
}

impl InstanceView {
    pub fn new(record: &Record<BookInstance>, book: Option<&Record<Book>>) -> Self {
        Self {
            id: record.id.to_string(),
            url: detail_url::<BookInstance>(record.id),
            imprint: record.imprint.clone(),
            status: record.status.to_string(),
            due_back: book_instance::due_back_formatted(record),
            book: book.map(BookView::from),
        }
    }
}

impl From<&Record<BookInstance>> for InstanceView {
    fn from(record: &Record<BookInstance>) -> Self {
        Self::new(record, None)
    }
}

/// One `<option>` or checkbox on a form
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: impl ToString, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
            selected,
        }
    }
}
