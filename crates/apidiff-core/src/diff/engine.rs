//! Diff entry points.
//!
//! [`compute_diff`] accepts raw snapshot bytes for both sides;
//! [`diff_snapshots`] works on already-parsed snapshots.

use std::time::Instant;

use super::classes::diff_classes;
use super::model::ApiDiff;
use crate::core_types::schema::OP_DIFF_SNAPSHOTS;
use crate::core_types::RunId;
use crate::errors::ExError;
use crate::model::Snapshot;
use crate::{log_op_end, log_op_start};

/// Diff two parsed snapshots
///
/// Never fails: anomalies in either snapshot are logged and skipped.
pub fn diff_snapshots(new: &Snapshot, old: &Snapshot) -> ApiDiff {
    let run_id = RunId::new();
    let start = Instant::now();
    log_op_start!(
        OP_DIFF_SNAPSHOTS,
        run_id = run_id.as_str(),
        new_len = new.classes().len(),
        old_len = old.classes().len(),
    );

    let diff = diff_classes(new.classes(), old.classes());

    log_op_end!(
        OP_DIFF_SNAPSHOTS,
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        changed_len = diff.classes.len(),
    );
    diff
}

/// Parse both snapshots and diff them
///
/// # Errors
///
/// - `InvalidSnapshot`: either side is not UTF-8 JSON with an object root
/// - `MissingField`: either side lacks the top-level `items` list
pub fn compute_diff(new_bytes: &[u8], old_bytes: &[u8]) -> Result<ApiDiff, ExError> {
    let new = Snapshot::from_json_bytes(new_bytes).map_err(|e| e.with_entity_id("new"))?;
    let old = Snapshot::from_json_bytes(old_bytes).map_err(|e| e.with_entity_id("old"))?;
    Ok(diff_snapshots(&new, &old))
}
