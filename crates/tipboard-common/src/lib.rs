//! tipboard-common — Shared error types used across all Tipboard crates.

pub mod error;

pub use error::{Result, SelectionError, TipboardError};
