//! Book form

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{identifier, rule, FieldError, FormSchema};
use crate::models::Book;

/// Submitted book; `genre` repeats once per checked box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[validate(
        length(min = 1, message = "Author must not be empty."),
        custom(function = "author_rules")
    )]
    pub author: String,
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty."))]
    pub isbn: String,
    #[validate(custom(function = "genre_rules"))]
    pub genre: Vec<String>,
}

impl FormSchema for BookForm {
    const FIELDS: &'static [&'static str] = &["title", "author", "summary", "isbn", "genre"];
}

impl BookForm {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            summary: self.summary.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            genre: self
                .genre
                .iter()
                .map(|g| g.trim())
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn validated(&self) -> Result<Book, Vec<FieldError>> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        let author = identifier(&self.author).ok_or_else(|| {
            vec![FieldError {
                field: "author".to_string(),
                message: "Author must be a valid identifier.".to_string(),
            }]
        })?;
        let mut genres = Vec::with_capacity(self.genre.len());
        for id in self.genre.iter().filter_map(|g| identifier(g)) {
            if !genres.contains(&id) {
                genres.push(id);
            }
        }
        Ok(Book {
            title: self.title.clone(),
            author,
            summary: self.summary.clone(),
            isbn: self.isbn.clone(),
            genres,
        })
    }

    pub fn has_genre(&self, id: &str) -> bool {
        self.genre.iter().any(|g| g == id)
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genres.iter().map(|g| g.to_string()).collect(),
        }
    }
}

fn author_rules(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && identifier(value).is_none() {
        return Err(rule("identifier", "Author must be a valid identifier."));
    }
    Ok(())
}

fn genre_rules(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|g| identifier(g).is_none()) {
        return Err(rule("identifier", "Genre must be a valid identifier."));
    }
    Ok(())
}
