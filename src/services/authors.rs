//! Author service

use futures::TryFutureExt;
use uuid::Uuid;

use super::{take, DeleteOutcome, Fetched, WithDependents};
use crate::{
    error::AppResult,
    fanout::FanOut,
    models::{Author, Book, Record},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All authors by family name
    pub async fn list(&self) -> AppResult<Vec<Record<Author>>> {
        self.repository.authors.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Record<Author>> {
        self.repository.authors.get(id).await
    }

    /// Author together with their books
    pub async fn detail(&self, id: Uuid) -> AppResult<WithDependents<Author, Book>> {
        let mut joined = FanOut::new()
            .add("author", self.repository.authors.get(id).map_ok(Fetched::from))
            .add("author_books", self.repository.books.by_author(id).map_ok(Fetched::from))
            .join()
            .await?;

        Ok(WithDependents {
            record: take(&mut joined, "author")?,
            dependents: take(&mut joined, "author_books")?,
        })
    }

    pub async fn create(&self, author: &Author) -> AppResult<Record<Author>> {
        let created = self.repository.authors.create(author).await?;
        tracing::info!(id = %created.id, "Author created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, author: &Author) -> AppResult<Record<Author>> {
        let updated = self.repository.authors.update(id, author).await?;
        tracing::info!(id = %id, "Author updated");
        Ok(updated)
    }

    /// Delete an author unless books still reference them.
    ///
    /// The check and the delete are separate store calls.
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteOutcome<Author, Book>> {
        let detail = self.detail(id).await?;
        if !detail.dependents.is_empty() {
            tracing::info!(
                id = %id,
                books = detail.dependents.len(),
                "Author delete refused, books still reference it"
            );
            return Ok(DeleteOutcome::Blocked(detail));
        }

        self.repository.authors.delete(id).await?;
        tracing::info!(id = %id, "Author deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
