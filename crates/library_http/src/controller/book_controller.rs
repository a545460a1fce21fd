use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use library_core::{BookDto, BookId};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query string of `GET /books/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearch {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(find_all).post(create).put(update))
        .route("/books/search", get(search))
        .route("/books/:id", get(find_by_id).delete(delete))
}

async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<BookDto>>> {
    Ok(Json(state.with_books(|books| books.find_all())?))
}

async fn find_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> ApiResult<Response> {
    let book = state.with_books(|books| books.find_by_id(id))?;
    Ok(match book {
        Some(book) => Json(book).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookSearch>,
) -> ApiResult<Json<Vec<BookDto>>> {
    let found = match (query.title, query.release_date) {
        (Some(title), Some(date)) => {
            state.with_books(|books| books.find_by_title_and_release_date(&title, date))?
        }
        (Some(title), None) => state.with_books(|books| books.find_by_title(&title))?,
        (None, Some(date)) => state.with_books(|books| books.find_by_release_date(date))?,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "expected `title` and/or `releaseDate` query parameter".to_string(),
            ))
        }
    };
    Ok(Json(found))
}

async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BookDto>,
) -> ApiResult<(StatusCode, Json<BookDto>)> {
    let created = state.with_books(|books| books.create(request))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BookDto>,
) -> ApiResult<Json<BookDto>> {
    Ok(Json(state.with_books(|books| books.update(request))?))
}

async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BookId>,
) -> ApiResult<StatusCode> {
    state.with_books(|books| books.delete(id))?;
    Ok(StatusCode::NO_CONTENT)
}
