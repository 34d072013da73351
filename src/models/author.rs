//! Author model and display helpers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Author document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
}

impl Entity for Author {
    const COLLECTION: &'static str = "authors";
    const PATH: &'static str = "author";
    const LABEL: &'static str = "Author";
    const SORT_FIELD: &'static str = "family_name";
}

/// "Family, First"
pub fn full_name(author: &Author) -> String {
    format!("{}, {}", author.family_name, author.first_name)
}

/// Birth date as YYYY-MM-DD, empty if unknown
pub fn birthday(author: &Author) -> String {
    format_date(author.date_of_birth)
}

/// Death date as YYYY-MM-DD, empty if unknown
pub fn death(author: &Author) -> String {
    format_date(author.date_of_death)
}

/// "birth - death", or just the birth date while alive
pub fn lifespan(author: &Author) -> String {
    let death = death(author);
    if death.is_empty() {
        birthday(author)
    } else {
        format!("{} - {}", birthday(author), death)
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
