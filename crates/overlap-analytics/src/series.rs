//! Aggregate series builder.
//!
//! Flattens intersection buckets into the row shape an UpSet-style consumer
//! expects: one row per exact membership signature, sorted deterministically.

use overlap_core::{IntersectionBuckets, MembershipSignature};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One aggregated row: a membership signature and its accumulated weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    /// The exact set of funds this row represents.
    pub signature: MembershipSignature,

    /// Total weight attributed to this signature.
    pub value: f64,

    /// Number of distinct holdings contributing to this signature.
    pub holdings: usize,
}

/// The externally consumable overlap series.
///
/// Rows are sorted by value descending, ties broken by signature, so output
/// is deterministic run to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapSeries {
    rows: Vec<SeriesRow>,
}

impl OverlapSeries {
    /// Builds the series from decomposed buckets.
    ///
    /// Signatures are already canonical sets, so each appears once; the fold
    /// through a signature-keyed map keeps that true even if a producer ever
    /// hands over duplicates.
    #[must_use]
    pub fn from_buckets(buckets: &IntersectionBuckets) -> Self {
        let mut merged: HashMap<&MembershipSignature, (f64, usize)> = HashMap::new();
        for (signature, entry) in buckets.iter() {
            let slot = merged.entry(signature).or_insert((0.0, 0));
            slot.0 += entry.value;
            slot.1 += entry.holdings;
        }

        let mut rows: Vec<SeriesRow> = merged
            .into_iter()
            .map(|(signature, (value, holdings))| SeriesRow {
                signature: signature.clone(),
                value,
                holdings,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.signature.cmp(&b.signature))
        });

        Self { rows }
    }

    /// The rows, highest value first.
    #[must_use]
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    /// The row for a signature, if present.
    #[must_use]
    pub fn get(&self, signature: &MembershipSignature) -> Option<&SeriesRow> {
        self.rows.iter().find(|r| &r.signature == signature)
    }

    /// Number of distinct signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all row values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// Rows re-sorted by intersection degree descending, then value
    /// descending. Useful for consumers that group by degree.
    #[must_use]
    pub fn sorted_by_degree(&self) -> Vec<&SeriesRow> {
        let mut rows: Vec<&SeriesRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            b.signature
                .degree()
                .cmp(&a.signature.degree())
                .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
        });
        rows
    }
}
