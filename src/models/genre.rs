//! Genre model

use serde::{Deserialize, Serialize};

use super::Entity;

/// Genre document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

impl Genre {
    pub const NAME_FIELD: &'static str = "name";
}

impl Entity for Genre {
    const COLLECTION: &'static str = "genres";
    const PATH: &'static str = "genre";
    const LABEL: &'static str = "Genre";
    const SORT_FIELD: &'static str = "name";
}
