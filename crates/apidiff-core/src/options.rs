//! Report options.
//!
//! Loaded from a TOML file (kebab-case keys, all optional) and widened by
//! command-line flags.

use serde::{Deserialize, Serialize};

use crate::diff::{Bucket, ChangeRecord};
use crate::errors::{ApiDiffError, ExError};

/// Switches controlling which buckets widen the displayed totals and which
/// records the renderer shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ReportOptions {
    pub include_private: bool,
    pub include_deprecated: bool,
    pub include_class_details: bool,
    pub verbose_summary: bool,
}

impl ReportOptions {
    /// Parse options from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the text is not TOML or names an unknown key.
    ///
    /// # Example
    ///
    /// ```
    /// use apidiff_core::ReportOptions;
    ///
    /// let options = ReportOptions::from_toml_str("include-private = true").unwrap();
    /// assert!(options.include_private);
    /// assert!(!options.verbose_summary);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ExError> {
        toml::from_str(text).map_err(|e| {
            ExError::from(ApiDiffError::ConfigParse {
                reason: e.to_string(),
            })
        })
    }

    /// Turn on every switch that is on in `flags`
    ///
    /// Flags can only widen a loaded configuration, never narrow it.
    pub fn merge_flags(self, flags: ReportOptions) -> Self {
        Self {
            include_private: self.include_private || flags.include_private,
            include_deprecated: self.include_deprecated || flags.include_deprecated,
            include_class_details: self.include_class_details || flags.include_class_details,
            verbose_summary: self.verbose_summary || flags.verbose_summary,
        }
    }

    /// Whether a bucket is enabled; `all` always is
    pub fn includes(&self, bucket: Bucket) -> bool {
        match bucket {
            Bucket::All => true,
            Bucket::Private => self.include_private,
            Bucket::Deprecated => self.include_deprecated,
        }
    }

    /// Disabled buckets other than `master`
    pub fn excluded_buckets(&self, master: Bucket) -> Vec<Bucket> {
        Bucket::ALL
            .into_iter()
            .filter(|b| *b != master && !self.includes(*b))
            .collect()
    }

    /// Whether the renderer shows a record
    pub fn shows(&self, record: &ChangeRecord) -> bool {
        !(record.is_private && !self.include_private
            || record.is_deprecated && !self.include_deprecated
            || record.is_class && !self.include_class_details)
    }
}
