//! Failures that escape a handler.
//!
//! Selection errors never get here: the chart handlers turn them into
//! placeholder content. Anything else (PNG encoding, template rendering) is
//! answered with a 500 and a JSON `error` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tipboard_common::TipboardError;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] TipboardError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
