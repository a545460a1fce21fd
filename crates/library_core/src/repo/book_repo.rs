//! Book repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` inserts when `id` is `None` and overwrites the full row otherwise.
//! - Text and date finders use exact equality; results are ordered by `id ASC`.

use crate::model::book::{Book, BookId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Params, Row};

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    release_date,
    writer_id
FROM books";

const BOOK_COLUMNS: &[&str] = &["id", "title", "release_date", "writer_id"];

/// Data access for persisted books.
pub trait BookRepository {
    fn find_all(&self) -> RepoResult<Vec<Book>>;
    fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn find_by_title(&self, title: &str) -> RepoResult<Vec<Book>>;
    fn find_by_release_date(&self, release_date: NaiveDate) -> RepoResult<Vec<Book>>;
    fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> RepoResult<Vec<Book>>;
    /// Persists `book` and returns it with its store-assigned id.
    fn save(&self, book: &Book) -> RepoResult<Book>;
    /// Hard-deletes one book. Returns `NotFound` when no row matched.
    fn delete(&self, id: BookId) -> RepoResult<()>;

    fn exists_by_id(&self, id: BookId) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "books", BOOK_COLUMNS)?;
        Ok(Self { conn })
    }

    fn query_books(&self, filter: &str, params: impl Params) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} {filter} ORDER BY id ASC;"))?;
        let mut rows = stmt.query(params)?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }
        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Book>> {
        self.query_books("", [])
    }

    fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self
            .query_books("WHERE id = ?1", params![id])?
            .into_iter()
            .next())
    }

    fn find_by_title(&self, title: &str) -> RepoResult<Vec<Book>> {
        self.query_books("WHERE title = ?1", params![title])
    }

    fn find_by_release_date(&self, release_date: NaiveDate) -> RepoResult<Vec<Book>> {
        self.query_books("WHERE release_date = ?1", params![release_date])
    }

    fn find_by_title_and_release_date(
        &self,
        title: &str,
        release_date: NaiveDate,
    ) -> RepoResult<Vec<Book>> {
        self.query_books(
            "WHERE title = ?1 AND release_date = ?2",
            params![title, release_date],
        )
    }

    fn save(&self, book: &Book) -> RepoResult<Book> {
        book.validate()?;

        let id = match book.id {
            None => {
                self.conn.execute(
                    "INSERT INTO books (title, release_date, writer_id)
                     VALUES (?1, ?2, ?3);",
                    params![book.title.as_str(), book.release_date, book.writer_id],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO books (id, title, release_date, writer_id)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        title = excluded.title,
                        release_date = excluded.release_date,
                        writer_id = excluded.writer_id;",
                    params![id, book.title.as_str(), book.release_date, book.writer_id],
                )?;
                id
            }
        };

        Ok(Book {
            id: Some(id),
            ..book.clone()
        })
    }

    fn delete(&self, id: BookId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: "books", id });
        }
        Ok(())
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let book = Book {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        release_date: row.get("release_date")?,
        writer_id: row.get("writer_id")?,
    };
    book.validate()
        .map_err(|err| RepoError::InvalidData(format!("books row {:?}: {err}", book.id)))?;
    Ok(book)
}
