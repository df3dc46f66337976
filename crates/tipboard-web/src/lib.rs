//! tipboard-web — HTTP surface for Tipboard.
//! Serves:
//!   - the filterable revenue dashboard (/index_two) and its chart endpoints
//!   - two chat sub-applications (instant and streaming echo)
//!   - static assets under /static

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
pub mod query;
pub mod templates;
pub mod chat_app;
pub mod sse;
