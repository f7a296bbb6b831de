//! End-to-end overlap pipeline over normalized funds.

use crate::config::OverlapConfig;
use crate::decompose::decompose;
use crate::ownership::OwnershipIndex;
use crate::series::OverlapSeries;
use overlap_core::{Fund, OverlapError, OverlapResult};

/// Computes the overlap series for a set of normalized funds.
///
/// Index, decompose, aggregate. Fails with [`OverlapError::NotEnoughFunds`]
/// when fewer than two funds are given; an overlap chart over one fund is
/// meaningless.
pub fn compute_overlap(funds: &[Fund], config: &OverlapConfig) -> OverlapResult<OverlapSeries> {
    if funds.len() < 2 {
        return Err(OverlapError::not_enough_funds(funds.len()));
    }

    let index = OwnershipIndex::build(funds);
    let buckets = decompose(&index, config);
    Ok(OverlapSeries::from_buckets(&buckets))
}
