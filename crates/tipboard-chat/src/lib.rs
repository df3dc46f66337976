//! tipboard-chat — Toy chat responders mounted by the web crate.
//!
//! A responder maps one chat turn (message + client-held history) to either a
//! complete reply or a stream of progressively longer partial replies.

pub mod responder;
pub mod echo;

pub use responder::{collect_reply, ChatMessage, ChatTurn, Reply, ReplyStream, Responder, Role};
pub use echo::{EchoResponder, StreamingEchoResponder};
