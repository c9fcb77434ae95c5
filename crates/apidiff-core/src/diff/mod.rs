//! API diff engine.
//!
//! Compares two class-metadata snapshots and produces a structured,
//! deterministic [`ApiDiff`]: per-class change records plus a [`CountTable`].
//!
//! ## Entry point
//!
//! ```
//! use apidiff_core::diff::compute_diff;
//!
//! let new = br#"{"items": [{"$type": "class", "name": "Foo"}]}"#;
//! let old = br#"{"items": []}"#;
//! let diff = compute_diff(new, old).unwrap();
//! assert_eq!(diff.classes[0].name, "Foo");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical records in identical order.
//! - **Graceful absence**: a category present on only one side contributes nothing.
//! - **Keep-first**: a duplicate name is logged as an anomaly and skipped.
//! - **First difference only**: a modified entity carries at most one scalar delta.

pub mod classes;
pub mod counts;
pub mod engine;
pub mod index;
pub mod members;
pub mod model;
pub mod scalar;

pub use classes::diff_classes;
pub use counts::{Bucket, CategoryCounts, CountTable, Counter, Counters};
pub use engine::{compute_diff, diff_snapshots};
pub use model::{Action, ActionSet, ApiDiff, AttributeDelta, ChangeRecord};
