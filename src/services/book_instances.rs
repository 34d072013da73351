//! Book instance service

use std::collections::HashMap;

use futures::TryFutureExt;
use uuid::Uuid;

use super::{take, Fetched};
use crate::{
    error::AppResult,
    fanout::FanOut,
    models::{Book, BookInstance, Record},
    repository::Repository,
};

/// A copy with its book resolved
#[derive(Debug, Clone)]
pub struct InstanceSummary {
    pub instance: Record<BookInstance>,
    /// `None` when the referenced book no longer exists
    pub book: Option<Record<Book>>,
}

#[derive(Clone)]
pub struct BookInstancesService {
    repository: Repository,
}

impl BookInstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All copies by due date, with book titles resolved
    pub async fn list(&self) -> AppResult<Vec<InstanceSummary>> {
        let mut joined = FanOut::new()
            .add("book_instances", self.repository.book_instances.list().map_ok(Fetched::from))
            .add("books", self.repository.books.list().map_ok(Fetched::from))
            .join()
            .await?;

        let instances: Vec<Record<BookInstance>> = take(&mut joined, "book_instances")?;
        let books: HashMap<Uuid, Record<Book>> = take::<Vec<Record<Book>>>(&mut joined, "books")?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        Ok(instances
            .into_iter()
            .map(|instance| InstanceSummary {
                book: books.get(&instance.book).cloned(),
                instance,
            })
            .collect())
    }

    pub async fn detail(&self, id: Uuid) -> AppResult<InstanceSummary> {
        let instance = self.repository.book_instances.get(id).await?;
        let book = self.repository.books.find_by_id(instance.book).await?;
        Ok(InstanceSummary { instance, book })
    }

    /// Books offered by the copy form
    pub async fn book_choices(&self) -> AppResult<Vec<Record<Book>>> {
        self.repository.books.list().await
    }

    /// Stored copy plus book choices, for the update form
    pub async fn edit(&self, id: Uuid) -> AppResult<(Record<BookInstance>, Vec<Record<Book>>)> {
        let mut joined = FanOut::new()
            .add("book_instance", self.repository.book_instances.get(id).map_ok(Fetched::from))
            .add("books", self.repository.books.list().map_ok(Fetched::from))
            .join()
            .await?;

        Ok((
            take(&mut joined, "book_instance")?,
            take(&mut joined, "books")?,
        ))
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Record<BookInstance>> {
        self.repository.book_instances.get(id).await
    }

    pub async fn create(&self, instance: &BookInstance) -> AppResult<Record<BookInstance>> {
        let created = self.repository.book_instances.create(instance).await?;
        tracing::info!(id = %created.id, book = %instance.book, "Book instance created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, instance: &BookInstance) -> AppResult<Record<BookInstance>> {
        let updated = self.repository.book_instances.update(id, instance).await?;
        tracing::info!(id = %id, "Book instance updated");
        Ok(updated)
    }

    /// Copies have no dependents and are always removable
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.book_instances.delete(id).await?;
        tracing::info!(id = %id, "Book instance deleted");
        Ok(())
    }
}
