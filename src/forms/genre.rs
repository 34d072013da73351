//! Genre form

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{rule, FieldError, FormSchema};
use crate::models::Genre;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GenreForm {
    #[validate(
        length(min = 1, message = "Genre name required."),
        custom(function = "name_rules")
    )]
    pub name: String,
}

impl FormSchema for GenreForm {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl GenreForm {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }

    pub fn validated(&self) -> Result<Genre, Vec<FieldError>> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Genre {
            name: self.name.clone(),
        })
    }
}

impl From<&Genre> for GenreForm {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}

/// 3 to 100 characters once present
fn name_rules(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > 0 && !(3..=100).contains(&len) {
        return Err(rule(
            "length",
            "Genre name must be between 3 and 100 characters.",
        ));
    }
    Ok(())
}
