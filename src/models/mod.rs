//! Data models for the library catalog
//!
//! Model structs describe the stored document bodies. Display fields such as
//! URLs or formatted dates are free functions over those bodies.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use std::ops::Deref;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

pub use author::Author;
pub use book::Book;
pub use book_instance::{BookInstance, InstanceStatus};
pub use genre::Genre;

/// A catalog entity stored as one document per record
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding the documents
    const COLLECTION: &'static str;
    /// URL segment under `/catalog/`
    const PATH: &'static str;
    /// Human readable name used in messages
    const LABEL: &'static str;
    /// Field the list view is sorted by
    const SORT_FIELD: &'static str;
}

/// A stored record: the storage-assigned identifier plus the document fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Detail page address of a record
pub fn detail_url<E: Entity>(id: Uuid) -> String {
    format!("/catalog/{}/{}", E::PATH, id)
}

/// List page address of an entity
pub fn list_url<E: Entity>() -> String {
    format!("/catalog/{}s", E::PATH)
}
