//! Book entity.
//!
//! # Invariants
//! - `writer_id` must reference an existing writer whenever a book is written;
//!   the book service checks this before persistence.
//! - `title` is non-blank.

use crate::model::validation::{require_text, ValidationError};
use crate::model::writer::WriterId;
use chrono::NaiveDate;

/// Store-assigned numeric book identifier.
pub type BookId = i64;

/// Persisted book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// `None` until the store assigns an id on insert.
    pub id: Option<BookId>,
    pub title: String,
    pub release_date: NaiveDate,
    /// Foreign key into `writers`.
    pub writer_id: WriterId,
}

impl Book {
    /// Creates a not-yet-persisted book.
    pub fn new(title: impl Into<String>, release_date: NaiveDate, writer_id: WriterId) -> Self {
        Self {
            id: None,
            title: title.into(),
            release_date,
            writer_id,
        }
    }

    /// Checks field rules that do not need storage access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }
}
