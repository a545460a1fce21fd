//! Writer repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` inserts when `id` is `None` and overwrites the full row otherwise.
//! - Deleting a writer still referenced by books fails with
//!   `RepoError::ConstraintViolation`.

use crate::model::writer::{Writer, WriterId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Params, Row};

const WRITER_SELECT_SQL: &str = "SELECT
    id,
    name,
    birth_date
FROM writers";

const WRITER_COLUMNS: &[&str] = &["id", "name", "birth_date"];

/// Data access for persisted writers.
pub trait WriterRepository {
    fn find_all(&self) -> RepoResult<Vec<Writer>>;
    fn find_by_id(&self, id: WriterId) -> RepoResult<Option<Writer>>;
    fn find_by_name(&self, name: &str) -> RepoResult<Vec<Writer>>;
    fn find_by_birth_date(&self, birth_date: NaiveDate) -> RepoResult<Vec<Writer>>;
    fn find_by_name_and_birth_date(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> RepoResult<Vec<Writer>>;
    /// Persists `writer` and returns it with its store-assigned id.
    fn save(&self, writer: &Writer) -> RepoResult<Writer>;
    fn delete(&self, id: WriterId) -> RepoResult<()>;

    fn exists_by_id(&self, id: WriterId) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// SQLite-backed writer repository.
pub struct SqliteWriterRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWriterRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "writers", WRITER_COLUMNS)?;
        Ok(Self { conn })
    }

    fn query_writers(&self, filter: &str, params: impl Params) -> RepoResult<Vec<Writer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WRITER_SELECT_SQL} {filter} ORDER BY id ASC;"))?;
        let mut rows = stmt.query(params)?;
        let mut writers = Vec::new();
        while let Some(row) = rows.next()? {
            writers.push(parse_writer_row(row)?);
        }
        Ok(writers)
    }
}

impl WriterRepository for SqliteWriterRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Writer>> {
        self.query_writers("", [])
    }

    fn find_by_id(&self, id: WriterId) -> RepoResult<Option<Writer>> {
        Ok(self
            .query_writers("WHERE id = ?1", params![id])?
            .into_iter()
            .next())
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Vec<Writer>> {
        self.query_writers("WHERE name = ?1", params![name])
    }

    fn find_by_birth_date(&self, birth_date: NaiveDate) -> RepoResult<Vec<Writer>> {
        self.query_writers("WHERE birth_date = ?1", params![birth_date])
    }

    fn find_by_name_and_birth_date(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> RepoResult<Vec<Writer>> {
        self.query_writers(
            "WHERE name = ?1 AND birth_date = ?2",
            params![name, birth_date],
        )
    }

    fn save(&self, writer: &Writer) -> RepoResult<Writer> {
        writer.validate()?;

        let id = match writer.id {
            None => {
                self.conn.execute(
                    "INSERT INTO writers (name, birth_date) VALUES (?1, ?2);",
                    params![writer.name.as_str(), writer.birth_date],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO writers (id, name, birth_date)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        birth_date = excluded.birth_date;",
                    params![id, writer.name.as_str(), writer.birth_date],
                )?;
                id
            }
        };

        Ok(Writer {
            id: Some(id),
            ..writer.clone()
        })
    }

    fn delete(&self, id: WriterId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM writers WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "writers",
                id,
            });
        }
        Ok(())
    }
}

fn parse_writer_row(row: &Row<'_>) -> RepoResult<Writer> {
    let writer = Writer {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        birth_date: row.get("birth_date")?,
    };
    writer
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("writers row {:?}: {err}", writer.id)))?;
    Ok(writer)
}
