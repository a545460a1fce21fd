use chrono::NaiveDate;
use library_core::db::migrations::latest_version;
use library_core::db::open_db_in_memory;
use library_core::{
    Book, BookRepository, RepoError, SqliteBookRepository, SqliteWriterRepository, Writer,
    WriterRepository,
};
use rusqlite::Connection;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn orwell(conn: &Connection) -> Writer {
    let writers = SqliteWriterRepository::try_new(conn).unwrap();
    writers
        .save(&Writer::new("George Orwell", date(1903, 6, 25)))
        .unwrap()
}

#[test]
fn save_without_id_assigns_one_and_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let writer = orwell(&conn);
    let books = SqliteBookRepository::try_new(&conn).unwrap();

    let saved = books
        .save(&Book::new("1984", date(1949, 6, 8), writer.id.unwrap()))
        .unwrap();

    let id = saved.id.expect("store should assign an id");
    let loaded = books.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.release_date, date(1949, 6, 8));
}

#[test]
fn save_with_existing_id_overwrites_full_row() {
    let conn = open_db_in_memory().unwrap();
    let writer_id = orwell(&conn).id.unwrap();
    let books = SqliteBookRepository::try_new(&conn).unwrap();

    let mut book = books
        .save(&Book::new("Animal Farm", date(1945, 8, 17), writer_id))
        .unwrap();
    book.title = "Animal Farm: A Fairy Story".to_string();
    book.release_date = date(1945, 8, 18);
    let updated = books.save(&book).unwrap();

    assert_eq!(updated.id, book.id);
    assert_eq!(books.find_all().unwrap(), vec![updated]);
}

#[test]
fn finders_use_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let writer_id = orwell(&conn).id.unwrap();
    let books = SqliteBookRepository::try_new(&conn).unwrap();

    let nineteen = books
        .save(&Book::new("1984", date(1949, 6, 8), writer_id))
        .unwrap();
    let farm = books
        .save(&Book::new("Animal Farm", date(1945, 8, 17), writer_id))
        .unwrap();
    let reprint = books
        .save(&Book::new("1984", date(1950, 1, 1), writer_id))
        .unwrap();

    assert_eq!(
        books.find_by_title("1984").unwrap(),
        vec![nineteen.clone(), reprint.clone()]
    );
    assert!(books.find_by_title("animal farm").unwrap().is_empty());
    assert_eq!(
        books.find_by_release_date(date(1945, 8, 17)).unwrap(),
        vec![farm.clone()]
    );
    assert_eq!(
        books
            .find_by_title_and_release_date("1984", date(1950, 1, 1))
            .unwrap(),
        vec![reprint]
    );
    assert!(books
        .find_by_title_and_release_date("Animal Farm", date(1949, 6, 8))
        .unwrap()
        .is_empty());
    assert_eq!(books.find_all().unwrap().len(), 3);
}

#[test]
fn delete_removes_row_and_reports_missing_rows() {
    let conn = open_db_in_memory().unwrap();
    let writer_id = orwell(&conn).id.unwrap();
    let books = SqliteBookRepository::try_new(&conn).unwrap();

    let id = books
        .save(&Book::new("1984", date(1949, 6, 8), writer_id))
        .unwrap()
        .id
        .unwrap();
    books.delete(id).unwrap();
    assert!(!books.exists_by_id(id).unwrap());

    let err = books.delete(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { table: "books", id: missing } if missing == id));
}

#[test]
fn store_rejects_book_with_unknown_writer() {
    let conn = open_db_in_memory().unwrap();
    let books = SqliteBookRepository::try_new(&conn).unwrap();

    let err = books
        .save(&Book::new("Orphan", date(2000, 1, 1), 999))
        .unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));
    assert!(books.find_all().unwrap().is_empty());
}

#[test]
fn deleting_referenced_writer_is_a_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let writer_id = orwell(&conn).id.unwrap();
    let books = SqliteBookRepository::try_new(&conn).unwrap();
    books
        .save(&Book::new("1984", date(1949, 6, 8), writer_id))
        .unwrap();

    let writers = SqliteWriterRepository::try_new(&conn).unwrap();
    let err = writers.delete(writer_id).unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));
    assert!(writers.exists_by_id(writer_id).unwrap());
}

#[test]
fn writer_finders_use_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let writers = SqliteWriterRepository::try_new(&conn).unwrap();

    let orwell = writers
        .save(&Writer::new("George Orwell", date(1903, 6, 25)))
        .unwrap();
    let huxley = writers
        .save(&Writer::new("Aldous Huxley", date(1894, 7, 26)))
        .unwrap();

    assert_eq!(writers.find_all().unwrap(), vec![orwell.clone(), huxley.clone()]);
    assert_eq!(
        writers.find_by_name("George Orwell").unwrap(),
        vec![orwell.clone()]
    );
    assert_eq!(
        writers.find_by_birth_date(date(1894, 7, 26)).unwrap(),
        vec![huxley]
    );
    assert_eq!(
        writers
            .find_by_name_and_birth_date("George Orwell", date(1903, 6, 25))
            .unwrap(),
        vec![orwell]
    );
    assert!(writers
        .find_by_name_and_birth_date("George Orwell", date(1894, 7, 26))
        .unwrap()
        .is_empty());
}

#[test]
fn validation_failure_blocks_writes() {
    let conn = open_db_in_memory().unwrap();
    let writers = SqliteWriterRepository::try_new(&conn).unwrap();

    let err = writers
        .save(&Writer::new("  ", date(1903, 6, 25)))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(writers.find_all().unwrap().is_empty());
}

#[test]
fn invalid_persisted_row_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO writers (name, birth_date) VALUES ('', '1903-06-25');",
        [],
    )
    .unwrap();

    let writers = SqliteWriterRepository::try_new(&conn).unwrap();
    let err = writers.find_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteBookRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteWriterRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("writers"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            writer_id INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteBookRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "books",
            column: "release_date"
        })
    ));
}
