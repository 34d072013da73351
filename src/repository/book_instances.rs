//! Book instance queries

use uuid::Uuid;

use super::Collection;
use crate::{
    error::AppResult,
    models::{BookInstance, InstanceStatus, Record},
};

impl Collection<BookInstance> {
    /// Copies of a book
    pub async fn by_book(&self, book_id: Uuid) -> AppResult<Vec<Record<BookInstance>>> {
        self.list_where(BookInstance::BOOK_FIELD, book_id.to_string()).await
    }

    pub async fn count_with_status(&self, status: InstanceStatus) -> AppResult<u64> {
        self.count_where(BookInstance::STATUS_FIELD, status.as_str()).await
    }
}
