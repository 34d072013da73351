//! Document store abstraction
//!
//! The catalog keeps one collection per entity. Every document is a JSON body
//! addressed by a storage-assigned UUID; references between entities are plain
//! identifiers inside the body, resolved by explicit queries.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::config::DatabaseConfig;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Errors raised by a document store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported store URL: {0}")]
    UnknownBackend(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A stored document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub body: Value,
}

/// Document selection
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    /// Field equals the value, or the field is an array containing it
    Eq(&'static str, Value),
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Filter::Eq(field, value.into())
    }

    /// Evaluate the filter against a document body
    pub fn matches(&self, body: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, expected) => match body.get(*field) {
                Some(Value::Array(items)) => items.contains(expected),
                Some(actual) => actual == expected,
                None => false,
            },
        }
    }
}

/// A filtered, optionally sorted read
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filter: Filter,
    /// Ascending sort on a top-level field
    pub sort_by: Option<&'static str>,
}

impl Query {
    pub fn all() -> Self {
        Self {
            filter: Filter::All,
            sort_by: None,
        }
    }

    pub fn filtered(filter: Filter) -> Self {
        Self {
            filter,
            sort_by: None,
        }
    }

    pub fn sorted_by(mut self, field: &'static str) -> Self {
        self.sort_by = Some(field);
        self
    }
}

/// Persistence backend holding one collection per entity.
///
/// Implementations give no transactional guarantees across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document, assigning its identifier
    async fn insert(&self, collection: &str, body: Value) -> StoreResult<Document>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>>;

    async fn find_by_ids(&self, collection: &str, ids: &[Uuid]) -> StoreResult<Vec<Document>>;

    async fn find(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>>;

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Replace the body of an existing document. Returns `None` if absent.
    async fn replace(&self, collection: &str, id: Uuid, body: Value) -> StoreResult<Option<Document>>;

    /// Remove a document. Returns `false` if absent.
    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool>;

    /// Check backend connectivity
    async fn ping(&self) -> StoreResult<()>;
}

/// Open the store selected by the connection string
pub async fn connect(config: &DatabaseConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    let url = config.url.as_str();

    if url.starts_with("memory://") {
        tracing::warn!("Using in-memory document store, data will not survive a restart");
        return Ok(Arc::new(MemoryDocumentStore::new()));
    }

    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        let store = PgDocumentStore::connect(config).await?;
        store.migrate().await?;
        return Ok(Arc::new(store));
    }

    Err(StoreError::UnknownBackend(url.to_string()))
}
