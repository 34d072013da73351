//! Book queries

use uuid::Uuid;

use super::Collection;
use crate::{
    error::AppResult,
    models::{Book, Record},
};

impl Collection<Book> {
    /// Books written by an author
    pub async fn by_author(&self, author_id: Uuid) -> AppResult<Vec<Record<Book>>> {
        self.list_where(Book::AUTHOR_FIELD, author_id.to_string()).await
    }

    /// Books tagged with a genre
    pub async fn by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Record<Book>>> {
        self.list_where(Book::GENRE_FIELD, genre_id.to_string()).await
    }
}
