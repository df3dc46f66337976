//! A self-contained chat sub-application around one `Responder`.
//!
//! Mounted with `Router::nest`, it serves:
//!   - `GET  /`            the chat page
//!   - `POST /api/message` `{"message", "history"}` in; `{"reply"}` JSON for a
//!     complete reply, or an SSE stream of partial replies

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use minijinja::context;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use tipboard_chat::{ChatTurn, Reply, Responder};

use crate::error::ApiError;
use crate::sse::reply_events;
use crate::templates::{Templates, CHAT};

pub struct ChatAppSpec {
    pub title: String,
    /// Where the app is nested; the page posts to `{base_path}/api/message`.
    pub base_path: String,
    pub responder: Arc<dyn Responder>,
    /// Whether replies arrive as a stream; only changes the page's hint text.
    pub streaming: bool,
}

struct ChatAppState {
    spec: ChatAppSpec,
    templates: Arc<Templates>,
}

type SharedChatState = Arc<ChatAppState>;

pub fn chat_app<S>(spec: ChatAppSpec, templates: Arc<Templates>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let state = Arc::new(ChatAppState { spec, templates });
    Router::new()
        .route("/", get(chat_page))
        .route("/api/message", post(chat_message))
        .with_state(state)
}

async fn chat_page(State(app): State<SharedChatState>) -> Result<Html<String>, ApiError> {
    let html = app.templates.render(
        CHAT,
        context! {
            title => app.spec.title,
            base_path => app.spec.base_path,
            streaming => app.spec.streaming,
        },
    )?;
    Ok(Html(html))
}

async fn chat_message(State(app): State<SharedChatState>, Json(turn): Json<ChatTurn>) -> Response {
    info!(
        app = %app.spec.title,
        chars = turn.message.chars().count(),
        history = turn.history.len(),
        "Chat message received"
    );
    match app.spec.responder.respond(turn) {
        Reply::Complete(text) => Json(json!({ "reply": text })).into_response(),
        Reply::Stream(stream) => reply_events(stream).into_response(),
    }
}
