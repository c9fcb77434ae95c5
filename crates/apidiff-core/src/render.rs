//! Markdown rendering of a finished diff.
//!
//! Both renderers read an [`ApiDiff`](crate::diff::ApiDiff) and never
//! modify it; visibility and displayed totals are decided by
//! [`ReportOptions`](crate::options::ReportOptions).

pub mod report;
pub mod summary;

pub use report::{render_document, render_report};
pub use summary::render_summary;

/// Bullet prefix for a nesting depth
pub(crate) fn bullet(depth: usize) -> String {
    format!("{}- ", "  ".repeat(depth))
}
