use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use library_core::{WriterDto, WriterId};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query string of `GET /writers/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterSearch {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/writers", get(find_all).post(create).put(update))
        .route("/writers/search", get(search))
        .route("/writers/:id", get(find_by_id).delete(delete))
}

async fn find_all(State(state): State<AppState>) -> ApiResult<Json<Vec<WriterDto>>> {
    Ok(Json(state.with_writers(|writers| writers.find_all())?))
}

async fn find_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WriterId>,
) -> ApiResult<Response> {
    Ok(match state.with_writers(|writers| writers.find_by_id(id))? {
        Some(writer) => Json(writer).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<WriterSearch>,
) -> ApiResult<Json<Vec<WriterDto>>> {
    let found = match (query.name, query.birth_date) {
        (Some(name), Some(date)) => {
            state.with_writers(|writers| writers.find_by_name_and_birth_date(&name, date))?
        }
        (Some(name), None) => state.with_writers(|writers| writers.find_by_name(&name))?,
        (None, Some(date)) => state.with_writers(|writers| writers.find_by_birth_date(date))?,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "expected `name` and/or `birthDate` query parameter".to_string(),
            ))
        }
    };
    Ok(Json(found))
}

async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<WriterDto>,
) -> ApiResult<(StatusCode, Json<WriterDto>)> {
    let created = state.with_writers(|writers| writers.create(request))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<WriterDto>,
) -> ApiResult<Json<WriterDto>> {
    Ok(Json(state.with_writers(|writers| writers.update(request))?))
}

async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<WriterId>,
) -> ApiResult<StatusCode> {
    state.with_writers(|writers| writers.delete(id))?;
    Ok(StatusCode::NO_CONTENT)
}
