//! Book instance form

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{format_date, identifier, optional_date, rule, FieldError, FormSchema};
use crate::models::{BookInstance, InstanceStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookInstanceForm {
    #[validate(
        length(min = 1, message = "Book must be specified."),
        custom(function = "book_rules")
    )]
    pub book: String,
    #[validate(length(min = 1, message = "Imprint must be specified."))]
    pub imprint: String,
    #[validate(custom(function = "status_rules"))]
    pub status: String,
    #[validate(custom(function = "due_back_rules"))]
    pub due_back: String,
}

impl FormSchema for BookInstanceForm {
    const FIELDS: &'static [&'static str] = &["book", "imprint", "status", "due_back"];
}

impl BookInstanceForm {
    /// Blank form for a new copy, due back today
    pub fn new_copy() -> Self {
        Self {
            status: InstanceStatus::default().to_string(),
            due_back: format_date(Some(today())),
            ..Self::default()
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            book: self.book.trim().to_string(),
            imprint: self.imprint.trim().to_string(),
            status: self.status.trim().to_string(),
            due_back: self.due_back.trim().to_string(),
        }
    }

    pub fn validated(&self) -> Result<BookInstance, Vec<FieldError>> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        let book = identifier(&self.book).ok_or_else(|| {
            vec![FieldError {
                field: "book".to_string(),
                message: "Book must be a valid identifier.".to_string(),
            }]
        })?;
        Ok(BookInstance {
            book,
            imprint: self.imprint.clone(),
            status: self.status.parse().unwrap_or_default(),
            due_back: optional_date(&self.due_back)
                .unwrap_or(None)
                .or_else(|| Some(today())),
        })
    }
}

impl From<&BookInstance> for BookInstanceForm {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.to_string(),
            due_back: format_date(instance.due_back),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn book_rules(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && identifier(value).is_none() {
        return Err(rule("identifier", "Book must be a valid identifier."));
    }
    Ok(())
}

/// Empty falls back to the default status
fn status_rules(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.parse::<InstanceStatus>().is_err() {
        return Err(rule(
            "status",
            "Status must be one of Available, Maintenance, Loaned, Reserved.",
        ));
    }
    Ok(())
}

fn due_back_rules(value: &str) -> Result<(), ValidationError> {
    optional_date(value).map(|_| ()).map_err(|_| rule("date", "Invalid due back date."))
}
