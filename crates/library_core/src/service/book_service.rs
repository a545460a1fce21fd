//! Book use-case service.
//!
//! # Invariants
//! - A book is only written when its `writer_id` resolves to a stored writer.
//! - `create` ignores any caller-supplied id; the store assigns one.
//! - `update` overwrites the full record and re-checks both the book and the
//!   writer on every call.

use crate::logging::ServiceLogger;
use crate::model::book::{Book, BookId};
use crate::model::dto::BookDto;
use crate::model::validation::ValidationError;
use crate::model::writer::WriterId;
use crate::repo::book_repo::BookRepository;
use crate::repo::writer_repo::WriterRepository;
use crate::service::{ServiceError, ServiceResult};
use chrono::NaiveDate;

const MODULE: &str = "book_service";

/// Book service over book and writer repositories.
pub struct BookService<B: BookRepository, W: WriterRepository> {
    books: B,
    writers: W,
    logger: ServiceLogger,
}

impl<B: BookRepository, W: WriterRepository> BookService<B, W> {
    /// Creates a service logging through the process logger.
    pub fn new(books: B, writers: W) -> Self {
        Self::with_logger(books, writers, ServiceLogger::global(module_path!(), MODULE))
    }

    pub fn with_logger(books: B, writers: W, logger: ServiceLogger) -> Self {
        Self {
            books,
            writers,
            logger,
        }
    }

    /// Returns every stored book.
    pub fn find_all(&self) -> ServiceResult<Vec<BookDto>> {
        let books = self
            .books
            .find_all()
            .map_err(|err| self.fail("book_find_all", err.into()))?;
        self.logger
            .info("book_find_all", format_args!("count={}", books.len()));
        Ok(to_dtos(books))
    }

    /// Returns the book with `id`, or `None`. A miss is not an error.
    pub fn find_by_id(&self, id: BookId) -> ServiceResult<Option<BookDto>> {
        let book = self
            .books
            .find_by_id(id)
            .map_err(|err| self.fail("book_find_by_id", err.into()))?;
        Ok(book.map(BookDto::from))
    }

    pub fn find_by_title(&self, title: &str) -> ServiceResult<Vec<BookDto>> {
        self.books
            .find_by_title(title)
            .map(to_dtos)
            .map_err(|err| self.fail("book_find_by_title", err.into()))
    }

    pub fn find_by_release_date(&self, release_date: NaiveDate) -> ServiceResult<Vec<BookDto>> {
        self.books
            .find_by_release_date(release_date)
            .map(to_dtos)
            .map_err(|err| self.fail("book_find_by_release_date", err.into()))
    }

    pub fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> ServiceResult<Vec<BookDto>> {
        self.books
            .find_by_title_and_release_date(title, release_date)
            .map(to_dtos)
            .map_err(|err| self.fail("book_find_by_title_and_release_date", err.into()))
    }

    /// Inserts a new book.
    ///
    /// # Errors
    /// - `Validation` when a field rule fails.
    /// - `WriterNotFound` when `writer_id` does not resolve; nothing is written.
    pub fn create(&self, dto: BookDto) -> ServiceResult<BookDto> {
        const EVENT: &str = "book_create";

        let mut book = Book::from(dto);
        book.validate()
            .map_err(|err| self.fail(EVENT, err.into()))?;
        self.ensure_writer_exists(EVENT, book.writer_id)?;

        book.id = None;
        let saved = self
            .books
            .save(&book)
            .map_err(|err| self.fail(EVENT, err.into()))?;
        Ok(saved.into())
    }

    /// Overwrites an existing book with `dto`.
    ///
    /// Checks run in order and stop at the first failure: id present, field
    /// rules, book exists, writer exists. A blank title on an unknown id is
    /// therefore `Validation`, not `BookNotFound`.
    ///
    /// # Errors
    /// - `Validation` when a field rule fails or `dto.id` is missing.
    /// - `BookNotFound` when `dto.id` does not resolve.
    /// - `WriterNotFound` when `dto.writer_id` does not resolve.
    pub fn update(&self, dto: BookDto) -> ServiceResult<BookDto> {
        const EVENT: &str = "book_update";

        let book = Book::from(dto);
        let id = book
            .id
            .ok_or_else(|| self.fail(EVENT, ValidationError::MissingId("book").into()))?;
        book.validate()
            .map_err(|err| self.fail(EVENT, err.into()))?;
        self.ensure_book_exists(EVENT, id)?;
        self.ensure_writer_exists(EVENT, book.writer_id)?;

        let saved = self
            .books
            .save(&book)
            .map_err(|err| self.fail(EVENT, err.into()))?;
        Ok(saved.into())
    }

    /// Deletes an existing book.
    ///
    /// # Errors
    /// - `BookNotFound` when `id` does not resolve.
    pub fn delete(&self, id: BookId) -> ServiceResult<()> {
        const EVENT: &str = "book_delete";

        self.ensure_book_exists(EVENT, id)?;
        self.books
            .delete(id)
            .map_err(|err| self.fail(EVENT, err.into()))
    }

    fn ensure_book_exists(&self, event: &str, id: BookId) -> ServiceResult<()> {
        let exists = self
            .books
            .exists_by_id(id)
            .map_err(|err| self.fail(event, err.into()))?;
        if !exists {
            return Err(self.fail(event, ServiceError::BookNotFound(id)));
        }
        Ok(())
    }

    fn ensure_writer_exists(&self, event: &str, writer_id: WriterId) -> ServiceResult<()> {
        let exists = self
            .writers
            .exists_by_id(writer_id)
            .map_err(|err| self.fail(event, err.into()))?;
        if !exists {
            return Err(self.fail(event, ServiceError::WriterNotFound(writer_id)));
        }
        Ok(())
    }

    fn fail(&self, event: &str, err: ServiceError) -> ServiceError {
        self.logger.error(
            event,
            format_args!("error_code={} error={err}", err.code()),
        );
        err
    }
}

fn to_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(BookDto::from).collect()
}
