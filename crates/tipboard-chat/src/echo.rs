//! Echo responders.

use futures_util::stream;
use std::time::Duration;
use tracing::debug;

use crate::responder::{ChatTurn, Reply, Responder};

pub const DEFAULT_STREAM_DELAY: Duration = Duration::from_millis(50);

/// Replies at once with "You said {message}".
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl Responder for EchoResponder {
    fn respond(&self, turn: ChatTurn) -> Reply {
        Reply::Complete(format!("You said {}", turn.message))
    }
}

/// Streams "Streaming Reply: {message}" one char at a time, sleeping `delay`
/// before each item.
///
/// The stream is lazy: no timer starts until it is polled, and dropping it
/// skips whatever delays remain.
#[derive(Debug, Clone, Copy)]
pub struct StreamingEchoResponder {
    delay: Duration,
}

impl StreamingEchoResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StreamingEchoResponder {
    fn default() -> Self {
        Self::new(DEFAULT_STREAM_DELAY)
    }
}

impl Responder for StreamingEchoResponder {
    fn respond(&self, turn: ChatTurn) -> Reply {
        let reply: Vec<char> = format!("Streaming Reply: {}", turn.message).chars().collect();
        let delay = self.delay;
        debug!(chars = reply.len(), ?delay, "Starting streamed reply");

        let partials = stream::unfold(
            (reply, 0usize, String::new()),
            move |(reply, next, mut partial)| async move {
                let Some(&ch) = reply.get(next) else {
                    return None;
                };
                tokio::time::sleep(delay).await;
                partial.push(ch);
                Some((partial.clone(), (reply, next + 1, partial)))
            },
        );
        Reply::Stream(Box::pin(partials))
    }
}
