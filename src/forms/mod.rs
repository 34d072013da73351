//! Submitted HTML forms and their validation schemas
//!
//! Every entity has one form type whose `validator` rules are applied to both
//! create and update submissions. Failures are flattened into `FieldError`s in
//! the order the fields appear on the form.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

pub use author::AuthorForm;
pub use book::BookForm;
pub use book_instance::BookInstanceForm;
pub use genre::GenreForm;

/// Date format used by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// A form with declared field order
pub trait FormSchema: Validate {
    const FIELDS: &'static [&'static str];

    /// Run the schema, returning every failure
    fn check(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => flatten(&errors, Self::FIELDS),
        }
    }
}

fn flatten(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let mut failures: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
            })
        })
        .collect();

    let position = |field: &str| order.iter().position(|f| *f == field).unwrap_or(order.len());
    failures.sort_by(|a, b| {
        position(&a.field)
            .cmp(&position(&b.field))
            .then_with(|| a.message.cmp(&b.message))
    });
    failures
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Empty or a YYYY-MM-DD date
fn optional_date(value: &str) -> Result<Option<NaiveDate>, ()> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ())
}

fn identifier(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value).ok()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
