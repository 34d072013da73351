//! Genre service

use futures::TryFutureExt;
use uuid::Uuid;

use super::{take, DeleteOutcome, Fetched, WithDependents};
use crate::{
    error::AppResult,
    fanout::FanOut,
    models::{Book, Genre, Record},
    repository::Repository,
};

/// Result of a genre creation request
#[derive(Debug, Clone)]
pub enum GenreCreated {
    Created(Record<Genre>),
    /// A genre with the same name was already stored; nothing was written
    Exists(Record<Genre>),
}

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Record<Genre>>> {
        self.repository.genres.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Record<Genre>> {
        self.repository.genres.get(id).await
    }

    /// Genre together with the books tagged with it
    pub async fn detail(&self, id: Uuid) -> AppResult<WithDependents<Genre, Book>> {
        let mut joined = FanOut::new()
            .add("genre", self.repository.genres.get(id).map_ok(Fetched::from))
            .add("genre_books", self.repository.books.by_genre(id).map_ok(Fetched::from))
            .join()
            .await?;

        Ok(WithDependents {
            record: take(&mut joined, "genre")?,
            dependents: take(&mut joined, "genre_books")?,
        })
    }

    /// Create a genre unless one with the same name exists.
    ///
    /// Uniqueness is a read followed by a write; two concurrent requests for
    /// the same name can both succeed.
    pub async fn create(&self, genre: &Genre) -> AppResult<GenreCreated> {
        if let Some(existing) = self.repository.genres.find_by_name(&genre.name).await? {
            tracing::debug!(id = %existing.id, name = %genre.name, "Genre already exists");
            return Ok(GenreCreated::Exists(existing));
        }

        let created = self.repository.genres.create(genre).await?;
        tracing::info!(id = %created.id, name = %genre.name, "Genre created");
        Ok(GenreCreated::Created(created))
    }

    pub async fn update(&self, id: Uuid, genre: &Genre) -> AppResult<Record<Genre>> {
        let updated = self.repository.genres.update(id, genre).await?;
        tracing::info!(id = %id, "Genre updated");
        Ok(updated)
    }

    /// Delete a genre unless books are still tagged with it
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteOutcome<Genre, Book>> {
        let detail = self.detail(id).await?;
        if !detail.dependents.is_empty() {
            tracing::info!(
                id = %id,
                books = detail.dependents.len(),
                "Genre delete refused, books still reference it"
            );
            return Ok(DeleteOutcome::Blocked(detail));
        }

        self.repository.genres.delete(id).await?;
        tracing::info!(id = %id, "Genre deleted");
        Ok(DeleteOutcome::Deleted)
    }
}
