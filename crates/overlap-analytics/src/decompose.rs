//! Exact-membership decomposer.
//!
//! The algorithmic heart: for every holding, peel minimal exclusive layers
//! off its owner list and attribute each layer's weight to the exact set of
//! funds still active when it was peeled.
//!
//! The peeling loop is a greedy layer decomposition of unevenly-weighted
//! overlapping contributions, the same move as water-filling a histogram:
//! sort remaining heights, subtract the floor, recurse on the remainder with
//! one fewer active owner. Invariants:
//!
//! - **Conservation**: every unit of a fund's reported weight for a holding
//!   is attributed to exactly one layer that fund participates in.
//! - **Exclusivity**: each layer carries the exact signature of funds still
//!   active at that point, never a superset or subset.
//! - **Termination**: each iteration removes one owner, so a holding with k
//!   owners finishes in exactly k iterations.

use crate::config::OverlapConfig;
use crate::ownership::{OwnershipEntry, OwnershipIndex};
use crate::parallel::maybe_parallel_fold;
use overlap_core::{IntersectionBuckets, MembershipSignature};
use std::cmp::Ordering;

/// Decomposes every holding in the index into exact-membership layers.
///
/// Holdings are independent, so with the `parallel` feature enabled and the
/// configured threshold exceeded, they are processed concurrently and the
/// partial buckets merged additively.
#[must_use]
pub fn decompose(index: &OwnershipIndex, config: &OverlapConfig) -> IntersectionBuckets {
    let holdings: Vec<&[OwnershipEntry]> = index.iter().map(|(_, owners)| owners).collect();

    maybe_parallel_fold(
        &holdings,
        config,
        IntersectionBuckets::new(),
        |mut buckets, owners| {
            peel_holding(owners.to_vec(), &mut buckets);
            buckets
        },
        |mut left, right| {
            left.merge(right);
            left
        },
    )
}

/// Peels one holding's owner list down to nothing, accumulating each layer
/// into `buckets`.
///
/// When two owners hold exactly equal remaining weight, whichever sorts first
/// is removed first. The choice is deterministic but otherwise arbitrary; it
/// never affects bucket totals, since either removal order attributes the
/// same weight to the same signatures.
fn peel_holding(mut owners: Vec<OwnershipEntry>, buckets: &mut IntersectionBuckets) {
    // Empty owner lists cannot arise from the index builder; no-op if handed one.
    while !owners.is_empty() {
        let signature: MembershipSignature = owners.iter().map(|o| o.fund.as_str()).collect();

        owners.sort_by(|a, b| {
            a.remaining
                .partial_cmp(&b.remaining)
                .unwrap_or(Ordering::Equal)
        });
        let min_value = owners[0].remaining;

        buckets.add(signature, min_value);

        for owner in &mut owners {
            owner.remaining -= min_value;
        }
        owners.remove(0);
    }
}
