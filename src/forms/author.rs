//! Author form

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{format_date, optional_date, rule, FieldError, FormSchema};
use crate::models::Author;

const NAME_MAX: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AuthorForm {
    #[validate(
        length(min = 1, message = "First name must be specified."),
        custom(function = "first_name_rules")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, message = "Family name must be specified."),
        custom(function = "family_name_rules")
    )]
    pub family_name: String,
    #[validate(custom(function = "date_of_birth_rules"))]
    pub date_of_birth: String,
    #[validate(custom(function = "date_of_death_rules"))]
    pub date_of_death: String,
}

impl FormSchema for AuthorForm {
    const FIELDS: &'static [&'static str] =
        &["first_name", "family_name", "date_of_birth", "date_of_death"];
}

impl AuthorForm {
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            family_name: self.family_name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            date_of_death: self.date_of_death.trim().to_string(),
        }
    }

    /// Check the schema and build the document
    pub fn validated(&self) -> Result<Author, Vec<FieldError>> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Author {
            first_name: self.first_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth: optional_date(&self.date_of_birth).unwrap_or(None),
            date_of_death: optional_date(&self.date_of_death).unwrap_or(None),
        })
    }
}

impl From<&Author> for AuthorForm {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: format_date(author.date_of_birth),
            date_of_death: format_date(author.date_of_death),
        }
    }
}

fn first_name_rules(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > NAME_MAX {
        return Err(rule("length", "First name must be at most 100 characters."));
    }
    Ok(())
}

fn family_name_rules(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(char::is_alphanumeric) {
        return Err(rule("alphanumeric", "Family name must be alphanumeric text."));
    }
    if value.chars().count() > NAME_MAX {
        return Err(rule("length", "Family name must be at most 100 characters."));
    }
    Ok(())
}

fn date_of_birth_rules(value: &str) -> Result<(), ValidationError> {
    optional_date(value).map(|_| ()).map_err(|_| rule("date", "Invalid date of birth."))
}

fn date_of_death_rules(value: &str) -> Result<(), ValidationError> {
    optional_date(value).map(|_| ()).map_err(|_| rule("date", "Invalid date of death."))
}
