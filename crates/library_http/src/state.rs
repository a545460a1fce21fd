//! Shared request state: the SQLite connection owned by the composition root.
//!
//! `rusqlite::Connection` is not `Sync`, so requests take turns through a
//! mutex and build their repositories over the borrowed connection.

use crate::error::{ApiError, ApiResult};
use library_core::{
    BookService, ServiceResult, SqliteBookRepository, SqliteWriterRepository, WriterService,
};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub type BookServiceRef<'conn> =
    BookService<SqliteBookRepository<'conn>, SqliteWriterRepository<'conn>>;
pub type WriterServiceRef<'conn> = WriterService<SqliteWriterRepository<'conn>>;

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Takes ownership of a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `call` against a book service scoped to this request.
    pub fn with_books<T>(
        &self,
        call: impl FnOnce(&BookServiceRef<'_>) -> ServiceResult<T>,
    ) -> ApiResult<T> {
        let conn = self.conn.lock().map_err(|_| ApiError::LockPoisoned)?;
        let service = BookService::new(
            SqliteBookRepository::try_new(&conn)?,
            SqliteWriterRepository::try_new(&conn)?,
        );
        Ok(call(&service)?)
    }

    /// Runs `call` against a writer service scoped to this request.
    pub fn with_writers<T>(
        &self,
        call: impl FnOnce(&WriterServiceRef<'_>) -> ServiceResult<T>,
    ) -> ApiResult<T> {
        let conn = self.conn.lock().map_err(|_| ApiError::LockPoisoned)?;
        let service = WriterService::new(SqliteWriterRepository::try_new(&conn)?);
        Ok(call(&service)?)
    }
}
