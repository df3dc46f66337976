//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use tipboard_chat::{EchoResponder, StreamingEchoResponder};

use crate::chat_app::{chat_app, ChatAppSpec};
use crate::handlers::{
    chart::{chart_fragment, chart_structured},
    dashboard::dashboard,
    index::{api_data, healthz, index},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    let chat = &shared.config.chat;

    let instant = chat_app(
        ChatAppSpec {
            title: chat.instant_title.clone(),
            base_path: chat.instant_path.clone(),
            responder: Arc::new(EchoResponder),
            streaming: false,
        },
        shared.templates.clone(),
    );
    let streaming = chat_app(
        ChatAppSpec {
            title: chat.stream_title.clone(),
            base_path: chat.stream_path.clone(),
            responder: Arc::new(StreamingEchoResponder::new(shared.config.stream_delay())),
            streaming: true,
        },
        shared.templates.clone(),
    );

    Router::new()
        // Pages
        .route("/",          get(index))
        .route("/index_two", get(dashboard))

        // API endpoints
        .route("/api/chart",   get(chart_fragment))
        .route("/api/chart_a", get(chart_structured))
        .route("/api/data",    get(api_data))
        .route("/healthz",     get(healthz))

        // Chat sub-applications
        .nest(&chat.instant_path, instant)
        .nest(&chat.stream_path, streaming)

        // Static files
        .nest_service("/static", ServeDir::new(&shared.config.server.static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared.clone())
}
