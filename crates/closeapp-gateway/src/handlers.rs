//! Route handlers. Generation is delegated to `closeapp_core`; this layer only
//! parses bodies and maps errors.

use std::sync::Arc;

use axum::{extract::State, Json};
use closeapp_core::{
    generate_close_response, generate_outreach, CloseResponseRequest, CloseResponseResult,
    OutreachRequest, OutreachResult,
};
use serde::Serialize;

use crate::api_error::ApiError;
use crate::diagnostics::{run_diagnostics, DiagnosticReport};
use crate::extract::JsonBody;
use crate::AppState;

#[derive(Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "CloseApp Backend is running",
    })
}

/// POST /api/close-response
pub async fn close_response(
    JsonBody(request): JsonBody<CloseResponseRequest>,
) -> Result<Json<CloseResponseResult>, ApiError> {
    let result = generate_close_response(&request)?;
    tracing::info!(
        tone = %result.tone,
        language = %result.language,
        "close-response generated"
    );
    Ok(Json(result))
}

/// POST /api/outreach
pub async fn outreach(
    JsonBody(request): JsonBody<OutreachRequest>,
) -> Result<Json<OutreachResult>, ApiError> {
    let result = generate_outreach(&request)?;
    tracing::info!(platform = %result.platform, tone = %result.tone, "outreach generated");
    Ok(Json(result))
}

/// GET /test
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticReport> {
    Json(run_diagnostics(&state.config).await)
}
