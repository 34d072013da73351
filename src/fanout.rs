//! Concurrent fan-out of independent reads, joined by label
//!
//! ```ignore
//! let mut joined = FanOut::new()
//!     .add("books", repository.books.count())
//!     .add("authors", repository.authors.count())
//!     .join()
//!     .await?;
//! let books = joined.take("books");
//! ```
//!
//! All operations are polled concurrently on the calling task. The join
//! resolves to the first error in completion order; remaining operations are
//! dropped and their results ignored. There is no partial-success mode.

use std::future::Future;

use futures::{
    future::{BoxFuture, FutureExt},
    stream::{FuturesUnordered, StreamExt},
};
use indexmap::IndexMap;

/// Builder for a labeled set of concurrent operations
pub struct FanOut<'a, T, E> {
    operations: IndexMap<&'static str, BoxFuture<'a, Result<T, E>>>,
}

impl<'a, T, E> FanOut<'a, T, E>
where
    T: Send + 'a,
    E: Send + 'a,
{
    pub fn new() -> Self {
        Self {
            operations: IndexMap::new(),
        }
    }

    /// Register an operation. Reusing a label replaces the earlier operation.
    pub fn add<F>(mut self, label: &'static str, operation: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        self.operations.insert(label, operation.boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Run every operation and wait for all of them, or for the first failure
    pub async fn join(self) -> Result<Joined<T>, E> {
        let mut pending: FuturesUnordered<_> = self
            .operations
            .into_iter()
            .map(|(label, operation)| operation.map(move |result| (label, result)))
            .collect();

        let mut values = IndexMap::with_capacity(pending.len());
        while let Some((label, result)) = pending.next().await {
            match result {
                Ok(value) => {
                    values.insert(label, value);
                }
                Err(e) => {
                    tracing::debug!(label, remaining = pending.len(), "fan-out operation failed");
                    return Err(e);
                }
            }
        }

        Ok(Joined { values })
    }
}

impl<'a, T, E> Default for FanOut<'a, T, E>
where
    T: Send + 'a,
    E: Send + 'a,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Results of a successful fan-out, keyed by label
#[derive(Debug)]
pub struct Joined<T> {
    values: IndexMap<&'static str, T>,
}

impl<T> Joined<T> {
    pub fn get(&self, label: &str) -> Option<&T> {
        self.values.get(label)
    }

    /// Move a result out of the join
    pub fn take(&mut self, label: &str) -> Option<T> {
        self.values.shift_remove(label)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}
