//! Business logic services

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;

use crate::{
    error::{AppError, AppResult},
    fanout::Joined,
    models::{Author, Book, BookInstance, Genre, Record},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub genres: genres::GenresService,
    pub book_instances: book_instances::BookInstancesService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            book_instances: book_instances::BookInstancesService::new(repository.clone()),
            repository,
        }
    }
}

/// A record together with the records that reference it
#[derive(Debug, Clone)]
pub struct WithDependents<T, D> {
    pub record: Record<T>,
    pub dependents: Vec<Record<D>>,
}

/// Result of a delete request on a record that may have dependents
#[derive(Debug, Clone)]
pub enum DeleteOutcome<T, D> {
    Deleted,
    /// Dependents exist; nothing was removed
    Blocked(WithDependents<T, D>),
}

/// One fan-out result; lets reads of different collections share a join
#[derive(Debug)]
pub enum Fetched {
    Author(Record<Author>),
    MaybeAuthor(Option<Record<Author>>),
    Authors(Vec<Record<Author>>),
    Book(Record<Book>),
    MaybeBook(Option<Record<Book>>),
    Books(Vec<Record<Book>>),
    Genre(Record<Genre>),
    Genres(Vec<Record<Genre>>),
    Instance(Record<BookInstance>),
    Instances(Vec<Record<BookInstance>>),
}

macro_rules! fetched {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Fetched {
            fn from(value: $ty) -> Self {
                Fetched::$variant(value)
            }
        }

        impl TryFrom<Fetched> for $ty {
            type Error = AppError;

            fn try_from(fetched: Fetched) -> AppResult<Self> {
                match fetched {
                    Fetched::$variant(value) => Ok(value),
                    other => Err(AppError::Internal(format!(
                        "expected {} fan-out result, got {:?}",
                        stringify!($variant),
                        other
                    ))),
                }
            }
        }
    };
}

fetched!(Author, Record<Author>);
fetched!(MaybeAuthor, Option<Record<Author>>);
fetched!(Authors, Vec<Record<Author>>);
fetched!(Book, Record<Book>);
fetched!(MaybeBook, Option<Record<Book>>);
fetched!(Books, Vec<Record<Book>>);
fetched!(Genre, Record<Genre>);
fetched!(Genres, Vec<Record<Genre>>);
fetched!(Instance, Record<BookInstance>);
fetched!(Instances, Vec<Record<BookInstance>>);

/// Move a labeled result out of a join as its concrete type
pub(crate) fn take<T>(joined: &mut Joined<Fetched>, label: &str) -> AppResult<T>
where
    T: TryFrom<Fetched, Error = AppError>,
{
    joined
        .take(label)
        .ok_or_else(|| AppError::Internal(format!("missing fan-out result: {}", label)))?
        .try_into()
}
