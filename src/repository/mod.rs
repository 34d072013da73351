//! Repository layer over the document store

pub mod books;
pub mod book_instances;
pub mod genres;

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInstance, Entity, Genre, Record},
    store::{Document, DocumentStore, Filter, Query},
};

/// Main repository struct holding the store handle
#[derive(Clone)]
pub struct Repository {
    pub store: Arc<dyn DocumentStore>,
    pub authors: Collection<Author>,
    pub books: Collection<Book>,
    pub genres: Collection<Genre>,
    pub book_instances: Collection<BookInstance>,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            authors: Collection::new(store.clone()),
            books: Collection::new(store.clone()),
            genres: Collection::new(store.clone()),
            book_instances: Collection::new(store.clone()),
            store,
        }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await?;
        Ok(())
    }
}

/// Typed access to one entity's collection
pub struct Collection<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// All records, sorted by the entity's list field
    pub async fn list(&self) -> AppResult<Vec<Record<E>>> {
        self.find(Query::all().sorted_by(E::SORT_FIELD)).await
    }

    /// Records whose field equals (or, for arrays, contains) the value
    pub async fn list_where(&self, field: &'static str, value: impl Into<Value>) -> AppResult<Vec<Record<E>>> {
        self.find(Query::filtered(Filter::eq(field, value)).sorted_by(E::SORT_FIELD))
            .await
    }

    async fn find(&self, query: Query) -> AppResult<Vec<Record<E>>> {
        self.store
            .find(E::COLLECTION, &query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Record<E>>> {
        self.store
            .find_by_id(E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Get a record by ID, failing with NotFound if absent
    pub async fn get(&self, id: Uuid) -> AppResult<Record<E>> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Record<E>>> {
        self.store
            .find_by_ids(E::COLLECTION, ids)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.count(E::COLLECTION, &Filter::All).await?)
    }

    pub async fn count_where(&self, field: &'static str, value: impl Into<Value>) -> AppResult<u64> {
        Ok(self
            .store
            .count(E::COLLECTION, &Filter::eq(field, value))
            .await?)
    }

    /// Insert a new record
    pub async fn create(&self, data: &E) -> AppResult<Record<E>> {
        let body = serde_json::to_value(data)?;
        let doc = self.store.insert(E::COLLECTION, body).await?;
        decode(doc)
    }

    /// Replace every field of an existing record, keeping its ID
    pub async fn update(&self, id: Uuid, data: &E) -> AppResult<Record<E>> {
        let body = serde_json::to_value(data)?;
        self.store
            .replace(E::COLLECTION, id, body)
            .await?
            .map(decode)
            .transpose()?
            .ok_or_else(|| not_found::<E>(id))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.store.delete(E::COLLECTION, id).await? {
            return Err(not_found::<E>(id));
        }
        Ok(())
    }
}

fn decode<E: Entity>(doc: Document) -> AppResult<Record<E>> {
    Ok(Record {
        id: doc.id,
        data: serde_json::from_value(doc.body)?,
    })
}

fn not_found<E: Entity>(id: Uuid) -> AppError {
    AppError::NotFound(format!("{} {} not found", E::LABEL, id))
}
