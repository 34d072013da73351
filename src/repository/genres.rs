//! Genre queries

use super::Collection;
use crate::{
    error::AppResult,
    models::{Genre, Record},
};

impl Collection<Genre> {
    /// First genre with exactly this name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Record<Genre>>> {
        Ok(self
            .list_where(Genre::NAME_FIELD, name)
            .await?
            .into_iter()
            .next())
    }
}
