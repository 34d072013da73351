//! Catalog home page

use axum::{extract::State, response::Html};
use serde::Serialize;

use crate::{error::AppResult, services::catalog::CatalogCounts, AppState};

#[derive(Serialize)]
struct IndexPage {
    title: &'static str,
    counts: Option<CatalogCounts>,
    /// Set when the counts could not be read; the page still renders
    error: Option<&'static str>,
}

/// Record counts for every collection
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = match state.services.catalog.counts().await {
        Ok(counts) => IndexPage {
            title: "Local Library Home",
            counts: Some(counts),
            error: None,
        },
        Err(e) => {
            tracing::error!("Failed to count catalog records: {}", e);
            IndexPage {
                title: "Local Library Home",
                counts: None,
                error: Some("Record counts are currently unavailable."),
            }
        }
    };
    state.views.render("index.html", &page)
}
