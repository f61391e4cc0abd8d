//! Response bodies and the mapping from `AppError` to HTTP status codes.

use crate::errors::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::any::Any;
use tracing::error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub saved_count: usize,
}

impl SaveResponse {
    pub fn saved(saved_count: usize) -> Self {
        Self {
            status: "ok",
            message: "time logs saved",
            saved_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, ErrorBody::new(message)),
            e @ AppError::InvalidDate(_) => (StatusCode::BAD_REQUEST, ErrorBody::new(e.to_string())),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    errors: Some(errors),
                    ..ErrorBody::new("validation error")
                },
            ),
            e @ AppError::Db(_) => {
                error!(error = %e, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(e.to_string()))
            }
            other => {
                error!(error = %other, "unhandled fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Other(format!("handler panicked: {detail}")).into_response()
}
