//! Core types shared across apidiff facilities
//!
//! This crate provides foundational types used by the error handling,
//! logging and reporting layers:
//!
//! - **Correlation types**: RunId identifying one diff run in the logs
//! - **Schema constants**: Canonical field keys, event names and op names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
