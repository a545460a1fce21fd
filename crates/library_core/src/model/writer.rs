//! Writer entity.

use crate::model::validation::{require_text, ValidationError};
use chrono::NaiveDate;

/// Store-assigned numeric writer identifier.
pub type WriterId = i64;

/// Persisted writer record. One writer may be referenced by many books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer {
    /// `None` until the store assigns an id on insert.
    pub id: Option<WriterId>,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Writer {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
        }
    }

    /// Checks field rules that do not need storage access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}
