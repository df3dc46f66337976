use futures_core::Stream;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One incoming message plus the conversation so far. History belongs to the
/// client; responders only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl ChatTurn {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), history: Vec::new() }
    }
}

/// Each item is the whole reply so far, not a delta. Consumers replace the
/// previous item rather than appending to it.
pub type ReplyStream = Pin<Box<dyn Stream<Item = String> + Send>>;

pub enum Reply {
    Complete(String),
    Stream(ReplyStream),
}

impl std::fmt::Debug for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Complete(text) => f.debug_tuple("Complete").field(text).finish(),
            Reply::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

pub trait Responder: Send + Sync {
    fn respond(&self, turn: ChatTurn) -> Reply;
}

/// Drive a reply to its final text. A stream yields its last item, or an
/// empty string if it produced nothing.
pub async fn collect_reply(reply: Reply) -> String {
    match reply {
        Reply::Complete(text) => text,
        Reply::Stream(mut stream) => {
            let mut last = String::new();
            while let Some(partial) = stream.next().await {
                last = partial;
            }
            last
        }
    }
}
