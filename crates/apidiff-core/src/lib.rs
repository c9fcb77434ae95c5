//! apidiff core - structural diff of class-metadata snapshots
//!
//! This crate provides:
//! - The snapshot data model (classes, member groups, members, nested items)
//! - The diff engine: class matcher, member category differ, scalar
//!   attribute differ, and the count aggregator
//! - Report options and the Markdown change renderer
//! - The error and logging facilities shared with the CLI

pub use apidiff_core_types as core_types;

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use diff::{compute_diff, diff_classes, diff_snapshots, ApiDiff, ChangeRecord, CountTable};
pub use errors::{ApiDiffError, ExError, ExErrorKind, Result};
pub use model::Snapshot;
pub use options::ReportOptions;
pub use render::{render_document, render_report, render_summary};
