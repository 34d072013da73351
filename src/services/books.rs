//! Book service

use std::collections::HashMap;

use futures::TryFutureExt;
use uuid::Uuid;

use super::{take, DeleteOutcome, Fetched, WithDependents};
use crate::{
    error::AppResult,
    fanout::FanOut,
    models::{Author, Book, BookInstance, Genre, Record},
    repository::Repository,
};

/// List row: a book with its author resolved
#[derive(Debug, Clone)]
pub struct BookSummary {
    pub book: Record<Book>,
    /// `None` when the referenced author no longer exists
    pub author: Option<Record<Author>>,
}

#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Record<Book>,
    pub author: Option<Record<Author>>,
    pub genres: Vec<Record<Genre>>,
    pub instances: Vec<Record<BookInstance>>,
}

/// Options offered by the book form
#[derive(Debug, Clone)]
pub struct BookChoices {
    pub authors: Vec<Record<Author>>,
    pub genres: Vec<Record<Genre>>,
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books by title, with authors resolved
    pub async fn list(&self) -> AppResult<Vec<BookSummary>> {
        let mut joined = FanOut::new()
            .add("books", self.repository.books.list().map_ok(Fetched::from))
            .add("authors", self.repository.authors.list().map_ok(Fetched::from))
            .join()
            .await?;

        let books: Vec<Record<Book>> = take(&mut joined, "books")?;
        let authors: HashMap<Uuid, Record<Author>> = take::<Vec<Record<Author>>>(&mut joined, "authors")?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(books
            .into_iter()
            .map(|book| BookSummary {
                author: authors.get(&book.author).cloned(),
                book,
            })
            .collect())
    }

    /// Book with author, genres and copies
    pub async fn detail(&self, id: Uuid) -> AppResult<BookDetail> {
        let mut joined = FanOut::new()
            .add("book", self.repository.books.get(id).map_ok(Fetched::from))
            .add("book_instances", self.repository.book_instances.by_book(id).map_ok(Fetched::from))
            .join()
            .await?;
        let book: Record<Book> = take(&mut joined, "book")?;
        let instances: Vec<Record<BookInstance>> = take(&mut joined, "book_instances")?;

        let mut related = FanOut::new()
            .add("author", self.repository.authors.find_by_id(book.author).map_ok(Fetched::from))
            .add("genres", self.repository.genres.find_by_ids(&book.genres).map_ok(Fetched::from))
            .join()
            .await?;

        Ok(BookDetail {
            author: take(&mut related, "author")?,
            genres: take(&mut related, "genres")?,
            book,
            instances,
        })
    }

    /// Authors and genres for the book form
    pub async fn choices(&self) -> AppResult<BookChoices> {
        let mut joined = FanOut::new()
            .add("authors", self.repository.authors.list().map_ok(Fetched::from))
            .add("genres", self.repository.genres.list().map_ok(Fetched::from))
            .join()
            .await?;

        Ok(BookChoices {
            authors: take(&mut joined, "authors")?,
            genres: take(&mut joined, "genres")?,
        })
    }

    /// Stored book plus form choices, for the update form
    pub async fn edit(&self, id: Uuid) -> AppResult<(Record<Book>, BookChoices)> {
        let mut joined = FanOut::new()
            .add("book", self.repository.books.get(id).map_ok(Fetched::from))
            .add("authors", self.repository.authors.list().map_ok(Fetched::from))
            .add("genres", self.repository.genres.list().map_ok(Fetched::from))
            .join()
            .await?;

        let book = take(&mut joined, "book")?;
        let choices = BookChoices {
            authors: take(&mut joined, "authors")?,
            genres: take(&mut joined, "genres")?,
        };
        Ok((book, choices))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Record<Book>> {
        self.repository.books.get(id).await
    }

    pub async fn create(&self, book: &Book) -> AppResult<Record<Book>> {
        let created = self.repository.books.create(book).await?;
        tracing::info!(id = %created.id, title = %book.title, "Book created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, book: &Book) -> AppResult<Record<Book>> {
        let updated = self.repository.books.update(id, book).await?;
        tracing::info!(id = %id, "Book updated");
        Ok(updated)
    }

    /// Book together with its copies
    pub async fn with_instances(&self, id: Uuid) -> AppResult<WithDependents<Book, BookInstance>> {
        let mut joined = FanOut::new()
            .add("book", self.repository.books.get(id).map_ok(Fetched::from))
            .add("book_instances", self.repository.book_instances.by_book(id).map_ok(Fetched::from))
            .join()
            .await?;

        Ok(WithDependents {
            record: take(&mut joined, "book")?,
            dependents: take(&mut joined, "book_instances")?,
        })
    }

    /// Delete a book unless copies of it still exist
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteOutcome<Book, BookInstance>> {
        let detail = self.with_instances(id).await?;
        if !detail.dependents.is_empty() {
            tracing::info!(
                id = %id,
                instances = detail.dependents.len(),
                "Book delete refused, copies still reference it"
            );
            return Ok(DeleteOutcome::Blocked(detail));
        }

        self.repository.books.delete(id).await?;
        tracing::info!(id = %id, "Book deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
