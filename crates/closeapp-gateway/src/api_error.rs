//! HTTP error mapping: every rejection becomes `(400, {"detail": "..."})`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use closeapp_core::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Body could not be parsed into the request schema.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        tracing::warn!(status = status.as_u16(), "request rejected: {}", self);
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
