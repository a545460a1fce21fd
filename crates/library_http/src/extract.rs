//! Request extractors whose rejections render as `ApiError` bodies.
//!
//! Axum's stock `Json`, `Query` and `Path` answer malformed input with a
//! plain-text body (and 422 for JSON). These wrappers route the rejection
//! through `ApiError::BadRequest` so every client error is a 400 with
//! `{ "error": "<message>" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
