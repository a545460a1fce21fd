//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Convert entities to transfer objects at the service boundary.
//! - Raise typed not-found errors transports can map to status codes.
//!
//! # Invariants
//! - Every failure path logs an `status=error` event before returning.
//! - Existence checks run before any write.

use crate::model::book::BookId;
use crate::model::validation::ValidationError;
use crate::model::writer::WriterId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod book_service;
pub mod writer_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Addressed book does not exist.
    BookNotFound(BookId),
    /// Addressed or referenced writer does not exist.
    WriterNotFound(WriterId),
    /// Input violates a field rule.
    Validation(ValidationError),
    /// Unclassified persistence failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(id) => write!(f, "Book not found with id = {id}"),
            Self::WriterNotFound(id) => write!(f, "Writer not found with id = {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { table: "books", id } => Self::BookNotFound(id),
            RepoError::NotFound {
                table: "writers",
                id,
            } => Self::WriterNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl ServiceError {
    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BookNotFound(_) => "book_not_found",
            Self::WriterNotFound(_) => "writer_not_found",
            Self::Validation(_) => "validation_failed",
            Self::Repo(RepoError::ConstraintViolation(_)) => "constraint_violation",
            Self::Repo(_) => "repo_failed",
        }
    }
}
