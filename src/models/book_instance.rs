//! Book instance (physical copy) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::Entity;

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 4] = [
        InstanceStatus::Available,
        InstanceStatus::Maintenance,
        InstanceStatus::Loaned,
        InstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

/// Book instance document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInstance {
    /// Book identifier
    pub book: Uuid,
    pub imprint: String,
    #[serde(default)]
    pub status: InstanceStatus,
    #[serde(default)]
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub const BOOK_FIELD: &'static str = "book";
    pub const STATUS_FIELD: &'static str = "status";
}

impl Entity for BookInstance {
    const COLLECTION: &'static str = "bookinstances";
    const PATH: &'static str = "bookinstance";
    const LABEL: &'static str = "Book instance";
    const SORT_FIELD: &'static str = "due_back";
}

/// Due date as e.g. "Oct 18, 2026", empty if unset
pub fn due_back_formatted(instance: &BookInstance) -> String {
    instance
        .due_back
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}
