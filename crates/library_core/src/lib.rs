//! Core domain logic for the library catalog.
//! This crate owns the Book/Writer invariants; transports only adapt it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, ServiceLogger};
pub use model::book::{Book, BookId};
pub use model::dto::{BookDto, WriterDto};
pub use model::validation::ValidationError;
pub use model::writer::{Writer, WriterId};
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::writer_repo::{SqliteWriterRepository, WriterRepository};
pub use repo::{RepoError, RepoResult};
pub use service::book_service::BookService;
pub use service::writer_service::WriterService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for transports.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
