//! Book model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Entity;

/// Book document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    /// Author identifier
    pub author: Uuid,
    pub summary: String,
    pub isbn: String,
    /// Genre identifiers
    #[serde(rename = "genre", default)]
    pub genres: Vec<Uuid>,
}

impl Book {
    /// Stored field holding the author reference
    pub const AUTHOR_FIELD: &'static str = "author";
    /// Stored field holding the genre references
    pub const GENRE_FIELD: &'static str = "genre";
}

impl Entity for Book {
    const COLLECTION: &'static str = "books";
    const PATH: &'static str = "book";
    const LABEL: &'static str = "Book";
    const SORT_FIELD: &'static str = "title";
}
