use chrono::NaiveDate;
use library_core::{Book, BookDto, Writer, WriterDto};
use serde_json::json;

#[test]
fn book_dto_uses_camel_case_and_iso_dates() {
    let dto = BookDto {
        id: Some(1),
        title: "1984".to_string(),
        release_date: NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
        writer_id: 1,
    };

    assert_eq!(
        serde_json::to_value(&dto).unwrap(),
        json!({
            "id": 1,
            "title": "1984",
            "releaseDate": "1949-06-08",
            "writerId": 1
        })
    );
}

#[test]
fn create_request_may_omit_id() {
    let dto: WriterDto = serde_json::from_value(json!({
        "name": "George Orwell",
        "birthDate": "1903-06-25"
    }))
    .unwrap();

    assert_eq!(dto.id, None);
    assert_eq!(dto.birth_date, NaiveDate::from_ymd_opt(1903, 6, 25).unwrap());
}

#[test]
fn malformed_date_is_rejected() {
    let result = serde_json::from_value::<BookDto>(json!({
        "title": "1984",
        "releaseDate": "08/06/1949",
        "writerId": 1
    }));
    assert!(result.is_err());
}

#[test]
fn conversion_copies_every_field() {
    let book = Book {
        id: Some(3),
        title: "Homage to Catalonia".to_string(),
        release_date: NaiveDate::from_ymd_opt(1938, 4, 25).unwrap(),
        writer_id: 1,
    };
    assert_eq!(Book::from(BookDto::from(book.clone())), book);

    let writer = Writer {
        id: Some(1),
        name: "George Orwell".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1903, 6, 25).unwrap(),
    };
    assert_eq!(Writer::from(WriterDto::from(writer.clone())), writer);
}
