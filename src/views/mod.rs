//! HTML rendering
//!
//! Templates are compiled into the binary and rendered with Tera. Autoescape
//! is on for every `.html` template, so stored text is escaped on output.

pub mod presenters;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppResult;

pub use presenters::{AuthorView, BookView, Choice, GenreView, InstanceView};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("form_errors.html", include_str!("../../templates/form_errors.html")),
    ("error.html", include_str!("../../templates/error.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("author_list.html", include_str!("../../templates/author_list.html")),
    ("author_detail.html", include_str!("../../templates/author_detail.html")),
    ("author_form.html", include_str!("../../templates/author_form.html")),
    ("author_delete.html", include_str!("../../templates/author_delete.html")),
    ("book_list.html", include_str!("../../templates/book_list.html")),
    ("book_detail.html", include_str!("../../templates/book_detail.html")),
    ("book_form.html", include_str!("../../templates/book_form.html")),
    ("book_delete.html", include_str!("../../templates/book_delete.html")),
    ("genre_list.html", include_str!("../../templates/genre_list.html")),
    ("genre_detail.html", include_str!("../../templates/genre_detail.html")),
    ("genre_form.html", include_str!("../../templates/genre_form.html")),
    ("genre_delete.html", include_str!("../../templates/genre_delete.html")),
    ("bookinstance_list.html", include_str!("../../templates/bookinstance_list.html")),
    ("bookinstance_detail.html", include_str!("../../templates/bookinstance_detail.html")),
    ("bookinstance_form.html", include_str!("../../templates/bookinstance_form.html")),
    ("bookinstance_delete.html", include_str!("../../templates/bookinstance_delete.html")),
];

/// Compiled page templates
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render a template with a serializable page context
    pub fn render<C: Serialize>(&self, template: &str, page: &C) -> AppResult<Html<String>> {
        let context = Context::from_serialize(page)?;
        Ok(Html(self.tera.render(template, &context)?))
    }
}
