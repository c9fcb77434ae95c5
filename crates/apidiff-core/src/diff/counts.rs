//! Count aggregator.
//!
//! Buckets beyond `all` are additive sub-counts, not partitions: one change
//! to a private, deprecated member increments `all`, `private` and
//! `deprecated` together. Displayed totals are obtained by subtracting the
//! buckets the reader opted out of from a master bucket.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::model::Action;
use crate::model::{Category, EntityFlags};

/// Cross-cutting count dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    All,
    Private,
    Deprecated,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::All, Bucket::Private, Bucket::Deprecated];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::All => "All",
            Bucket::Private => "Private",
            Bucket::Deprecated => "Deprecated",
        }
    }
}

/// One of the four counters kept per bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Added,
    Modified,
    Removed,
    Total,
}

impl From<Action> for Counter {
    fn from(action: Action) -> Self {
        match action {
            Action::Added => Counter::Added,
            Action::Modified => Counter::Modified,
            Action::Removed => Counter::Removed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub added: u64,
    pub modified: u64,
    pub removed: u64,
    pub total: u64,
}

impl Counters {
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Added => self.added,
            Counter::Modified => self.modified,
            Counter::Removed => self.removed,
            Counter::Total => self.total,
        }
    }

    fn get_mut(&mut self, counter: Counter) -> &mut u64 {
        match counter {
            Counter::Added => &mut self.added,
            Counter::Modified => &mut self.modified,
            Counter::Removed => &mut self.removed,
            Counter::Total => &mut self.total,
        }
    }

    /// Added + modified + removed
    pub fn changes(&self) -> u64 {
        self.added + self.modified + self.removed
    }

    /// Counter-wise subtraction, clamped at zero
    pub fn saturating_sub(self, other: Counters) -> Counters {
        Counters {
            added: self.added.saturating_sub(other.added),
            modified: self.modified.saturating_sub(other.modified),
            removed: self.removed.saturating_sub(other.removed),
            total: self.total.saturating_sub(other.total),
        }
    }
}

/// Counters of one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub all: Counters,
    pub private: Counters,
    pub deprecated: Counters,
    /// Entries skipped because of their `ignore` flag
    pub ignored: u64,
}

impl CategoryCounts {
    pub fn bucket(&self, bucket: Bucket) -> &Counters {
        match bucket {
            Bucket::All => &self.all,
            Bucket::Private => &self.private,
            Bucket::Deprecated => &self.deprecated,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Counters {
        match bucket {
            Bucket::All => &mut self.all,
            Bucket::Private => &mut self.private,
            Bucket::Deprecated => &mut self.deprecated,
        }
    }
}

/// Per-category, per-bucket change counters for one diff run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable {
    categories: BTreeMap<Category, CategoryCounts>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: Category, bucket: Bucket, counter: Counter) {
        *self
            .categories
            .entry(category)
            .or_default()
            .bucket_mut(bucket)
            .get_mut(counter) += 1;
    }

    /// Increment `counter` in `all` and in every bucket the entity qualifies for
    pub fn increment_for(&mut self, category: Category, flags: EntityFlags, counter: Counter) {
        for bucket in buckets_for(flags) {
            self.increment(category, bucket, counter);
        }
    }

    /// Count one evaluated entity toward `total`
    pub fn evaluated(&mut self, category: Category, flags: EntityFlags) {
        self.increment_for(category, flags, Counter::Total);
    }

    /// Count one classification
    pub fn record(&mut self, category: Category, action: Action, flags: EntityFlags) {
        self.increment_for(category, flags, action.into());
    }

    pub fn ignored(&mut self, category: Category) {
        self.categories.entry(category).or_default().ignored += 1;
    }

    /// Counters of a category; all zero if nothing was counted
    pub fn get(&self, category: Category) -> CategoryCounts {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategoryCounts)> {
        self.categories.iter().map(|(c, counts)| (*c, counts))
    }

    /// Master bucket minus every excluded bucket
    ///
    /// The master bucket itself is never subtracted even if listed.
    pub fn totals(&self, category: Category, master: Bucket, excluded: &[Bucket]) -> Counters {
        let counts = self.get(category);
        excluded
            .iter()
            .filter(|b| **b != master)
            .fold(*counts.bucket(master), |acc, b| {
                acc.saturating_sub(*counts.bucket(*b))
            })
    }
}

fn buckets_for(flags: EntityFlags) -> impl Iterator<Item = Bucket> {
    [
        Some(Bucket::All),
        flags.private.then_some(Bucket::Private),
        flags.deprecated.then_some(Bucket::Deprecated),
    ]
    .into_iter()
    .flatten()
}
