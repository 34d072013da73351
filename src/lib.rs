//! Local Library catalog
//!
//! A server-rendered catalog of authors, books, genres and book copies,
//! stored in a document store and rendered to HTML.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod fanout;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;
pub mod views;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;
use store::DocumentStore;
use views::Views;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
    pub views: Arc<Views>,
}

impl AppState {
    /// Wire services and templates over an already connected store
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> AppResult<Self> {
        let repository = Repository::new(store);
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
            views: Arc::new(Views::new()?),
        })
    }
}
