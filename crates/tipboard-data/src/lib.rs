//! tipboard-data — The fixed tips table and the filter → group-by-sum engine.
//!
//! The table is bundled into the binary and parsed once at startup. Nothing in
//! this crate mutates it afterwards, so a `TipsDataset` can be shared across
//! request handlers behind a plain `Arc`.

pub mod dataset;
pub mod aggregate;

pub use dataset::{DimensionDomain, TipRecord, TipsDataset};
pub use aggregate::{AggregateResult, FilterSelection, GroupKey};
