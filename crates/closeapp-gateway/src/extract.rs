//! `JsonBody<T>`: JSON request bodies, accepting requests that omit `Content-Type`.
//!
//! `axum::Json` rejects a body without `Content-Type: application/json`; clients of
//! this API may send bare JSON, so a missing header is parsed as JSON too. Any
//! other declared content type is still refused.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::api_error::ApiError;

const EXPECTED_JSON: &str = "Expected request with `Content-Type: application/json`";

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = req.headers().get(CONTENT_TYPE) {
            let declared = value.to_str().unwrap_or_default();
            if !is_json_content_type(declared) {
                return Err(ApiError::BadRequest(EXPECTED_JSON.to_string()));
            }
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
        })?;
        Ok(JsonBody(value))
    }
}

/// `application/json`, or any `+json` suffix type, parameters ignored.
fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind == "application" && (subtype == "json" || subtype.ends_with("+json"))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=utf-8"));
        assert!(is_json_content_type("application/problem+json"));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
        assert!(!is_json_content_type("json"));
        assert!(!is_json_content_type(""));
    }
}
