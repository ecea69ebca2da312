//! JSON error payloads.
//!
//! Lookup and request-shape failures answer with a single `error` string; validation and storage
//! failures answer with an `errors` list.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hhub_derive::api_model;

/// `{"error": "..."}`
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// `{"errors": ["..."]}`
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

pub fn errors_response<I, S>(status: StatusCode, messages: I) -> Response
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let errors = messages.into_iter().map(Into::into).collect();
    (status, Json(ErrorsResponse { errors })).into_response()
}
