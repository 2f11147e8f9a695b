//! Batch results
//!
//! Aggregate counts collected while adapting many rows at once.

use crate::adapter::Adapted;
use mast_record::Record;
use std::collections::{BTreeMap, BTreeSet};

/// Records produced from a batch of rows, in input order, plus their summary
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    /// One normalized record per input row
    pub records: Vec<Record>,

    /// Counts gathered while adapting
    pub summary: BatchSummary,
}

/// Null and unrecognized-field counts for a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of rows adapted
    pub record_count: usize,

    /// Internal name to number of records where it was null
    pub null_counts: BTreeMap<String, usize>,

    /// Published name to number of rows that carried it without a mapping
    pub unrecognized: BTreeMap<String, usize>,
}

impl BatchSummary {
    /// Start a summary for the given internal names, all counts at zero
    pub fn new<'a>(targets: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            record_count: 0,
            null_counts: targets
                .into_iter()
                .map(|name| (name.to_string(), 0))
                .collect(),
            unrecognized: BTreeMap::new(),
        }
    }

    /// Fold one adapted row into the counts
    pub fn observe(&mut self, adapted: &Adapted) {
        self.record_count += 1;
        for (name, value) in adapted.record.iter() {
            if value.is_none() {
                *self.null_counts.entry(name.to_string()).or_default() += 1;
            }
        }
        for name in &adapted.unrecognized {
            *self.unrecognized.entry(name.clone()).or_default() += 1;
        }
    }

    /// Share of records where the field was null, `None` for an unknown field or empty batch
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn null_rate(&self, name: &str) -> Option<f64> {
        if self.record_count == 0 {
            return None;
        }
        self.null_counts
            .get(name)
            .map(|&nulls| nulls as f64 / self.record_count as f64)
    }

    /// Fields that were null in every record of a non-empty batch
    #[must_use]
    pub fn always_null(&self) -> BTreeSet<&str> {
        if self.record_count == 0 {
            return BTreeSet::new();
        }
        self.null_counts
            .iter()
            .filter(|&(_, &nulls)| nulls == self.record_count)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
