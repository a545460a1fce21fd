use chrono::NaiveDate;
use library_core::db::open_db_in_memory;
use library_core::{
    BookDto, BookService, RepoError, ServiceError, SqliteBookRepository,
    SqliteWriterRepository, ValidationError, WriterDto, WriterService,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn orwell() -> WriterDto {
    WriterDto {
        id: None,
        name: "George Orwell".to_string(),
        birth_date: date(1903, 6, 25),
    }
}

#[test]
fn create_and_find_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    let created = service.create(orwell()).unwrap();

    let id = created.id.expect("id should be assigned");
    assert_eq!(created.name, "George Orwell");
    assert_eq!(service.find_by_id(id).unwrap(), Some(created));
    assert_eq!(service.find_by_id(id + 1).unwrap(), None);
}

#[test]
fn finders_filter_by_name_and_birth_date() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    let orwell = service.create(orwell()).unwrap();
    let huxley = service
        .create(WriterDto {
            id: None,
            name: "Aldous Huxley".to_string(),
            birth_date: date(1894, 7, 26),
        })
        .unwrap();

    assert_eq!(service.find_all().unwrap().len(), 2);
    assert_eq!(
        service.find_by_name("George Orwell").unwrap(),
        vec![orwell.clone()]
    );
    assert_eq!(
        service.find_by_birth_date(date(1894, 7, 26)).unwrap(),
        vec![huxley]
    );
    assert_eq!(
        service
            .find_by_name_and_birth_date("George Orwell", date(1903, 6, 25))
            .unwrap(),
        vec![orwell]
    );
}

#[test]
fn update_overwrites_existing_writer() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    let created = service.create(orwell()).unwrap();
    let request = WriterDto {
        name: "Eric Arthur Blair".to_string(),
        ..created.clone()
    };

    assert_eq!(service.update(request.clone()).unwrap(), request);
    assert_eq!(
        service.find_by_id(created.id.unwrap()).unwrap(),
        Some(request)
    );
}

#[test]
fn update_and_delete_require_existing_writer() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    let update_err = service
        .update(WriterDto {
            id: Some(7),
            ..orwell()
        })
        .unwrap_err();
    assert!(matches!(update_err, ServiceError::WriterNotFound(7)));
    assert!(service.find_all().unwrap().is_empty());

    let delete_err = service.delete(7).unwrap_err();
    assert_eq!(delete_err.to_string(), "Writer not found with id = 7");
}

#[test]
fn update_without_id_and_blank_name_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    assert!(matches!(
        service.update(orwell()),
        Err(ServiceError::Validation(ValidationError::MissingId("writer")))
    ));
    assert!(matches!(
        service.create(WriterDto {
            name: String::new(),
            ..orwell()
        }),
        Err(ServiceError::Validation(ValidationError::BlankField("name")))
    ));
}

#[test]
fn delete_removes_writer_without_books() {
    let conn = open_db_in_memory().unwrap();
    let service = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());

    let id = service.create(orwell()).unwrap().id.unwrap();
    service.delete(id).unwrap();

    assert_eq!(service.find_by_id(id).unwrap(), None);
}

#[test]
fn delete_writer_with_books_is_rejected_by_store() {
    let conn = open_db_in_memory().unwrap();
    let writers = WriterService::new(SqliteWriterRepository::try_new(&conn).unwrap());
    let books = BookService::new(
        SqliteBookRepository::try_new(&conn).unwrap(),
        SqliteWriterRepository::try_new(&conn).unwrap(),
    );

    let writer_id = writers.create(orwell()).unwrap().id.unwrap();
    books
        .create(BookDto {
            id: None,
            title: "1984".to_string(),
            release_date: date(1949, 6, 8),
            writer_id,
        })
        .unwrap();

    let err = writers.delete(writer_id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::ConstraintViolation(_))
    ));
    assert_eq!(err.code(), "constraint_violation");
    assert!(writers.find_by_id(writer_id).unwrap().is_some());
}
