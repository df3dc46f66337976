//! Server-Sent Events (SSE) for streamed chat replies.
//!
//! Each partial reply is a `message` event with `{"text": ...}` as data; a
//! final `done` event marks the end. If the client goes away the stream is
//! dropped, and the responder's remaining delays never run.

use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use serde::Serialize;
use std::time::Duration;
use tokio_stream::StreamExt;

use tipboard_chat::ReplyStream;

pub const MESSAGE_EVENT: &str = "message";
pub const DONE_EVENT: &str = "done";

#[derive(Debug, Serialize)]
struct PartialReply {
    text: String,
}

pub fn reply_events(stream: ReplyStream) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let events = stream
        .map(|text| Event::default().event(MESSAGE_EVENT).json_data(PartialReply { text }))
        .chain(tokio_stream::once(Ok(Event::default().event(DONE_EVENT).data("[DONE]"))));

    Sse::new(events).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
