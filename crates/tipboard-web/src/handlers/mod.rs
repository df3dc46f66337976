//! HTTP handlers for all web routes.

pub mod index;
pub mod dashboard;
pub mod chart;
