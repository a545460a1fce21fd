//! Transfer objects crossing the service boundary, and their explicit
//! conversions to and from entities.
//!
//! JSON shape uses camelCase keys and `YYYY-MM-DD` dates.

use crate::model::book::{Book, BookId};
use crate::model::writer::{Writer, WriterId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat book representation used by services and transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<BookId>,
    pub title: String,
    pub release_date: NaiveDate,
    pub writer_id: WriterId,
}

/// Flat writer representation used by services and transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterDto {
    #[serde(default)]
    pub id: Option<WriterId>,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            release_date: book.release_date,
            writer_id: book.writer_id,
        }
    }
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            release_date: dto.release_date,
            writer_id: dto.writer_id,
        }
    }
}

impl From<Writer> for WriterDto {
    fn from(writer: Writer) -> Self {
        Self {
            id: writer.id,
            name: writer.name,
            birth_date: writer.birth_date,
        }
    }
}

impl From<WriterDto> for Writer {
    fn from(dto: WriterDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            birth_date: dto.birth_date,
        }
    }
}
