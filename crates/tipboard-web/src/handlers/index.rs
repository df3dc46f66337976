//! Landing page and small JSON endpoints.

use axum::{extract::State, response::Html, Json};
use minijinja::context;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::SharedState;
use crate::templates::INDEX;

/// GET / - links to the chat widgets and the dashboard
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let chat = &state.config.chat;
    let html = state.templates.render(
        INDEX,
        context! {
            instant_path => chat.instant_path,
            instant_title => chat.instant_title,
            stream_path => chat.stream_path,
            stream_title => chat.stream_title,
        },
    )?;
    Ok(Html(html))
}

/// GET /api/data - fixed payload for smoke tests
pub async fn api_data() -> Json<Value> {
    Json(json!({ "data": 123 }))
}

/// GET /healthz
pub async fn healthz(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({ "status": "ok", "rows": state.dataset.len() }))
}
