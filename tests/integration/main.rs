//! Router-level tests over the in-memory document store

mod authors;
mod book_instances;
mod books;
mod catalog;
mod common;
mod genres;
