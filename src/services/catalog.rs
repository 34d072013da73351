//! Catalog dashboard service

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    fanout::FanOut,
    models::InstanceStatus,
    repository::Repository,
};

/// Record counts shown on the catalog home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub books: u64,
    pub book_instances: u64,
    pub book_instances_available: u64,
    pub authors: u64,
    pub genres: u64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count every collection in one fan-out
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let repo = &self.repository;
        let mut joined = FanOut::new()
            .add("book_count", repo.books.count())
            .add("book_instance_count", repo.book_instances.count())
            .add(
                "book_instance_available_count",
                repo.book_instances.count_with_status(InstanceStatus::Available),
            )
            .add("author_count", repo.authors.count())
            .add("genre_count", repo.genres.count())
            .join()
            .await?;

        let mut count = |label: &str| {
            joined
                .take(label)
                .ok_or_else(|| AppError::Internal(format!("missing fan-out result: {}", label)))
        };

        Ok(CatalogCounts {
            books: count("book_count")?,
            book_instances: count("book_instance_count")?,
            book_instances_available: count("book_instance_available_count")?,
            authors: count("author_count")?,
            genres: count("genre_count")?,
        })
    }
}
