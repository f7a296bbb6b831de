//! Ownership index builder.
//!
//! Inverts per-fund holdings into a per-holding list of owning funds with
//! their weights. Holdings absent from a fund simply have no entry for that
//! fund; no zero-entries are created.

use overlap_core::Fund;
use std::collections::HashMap;

/// One fund's contribution to a holding, with the weight still to be
/// attributed during decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipEntry {
    /// The owning fund's ticker.
    pub fund: String,

    /// Remaining unattributed weight. Starts at the reported weight and is
    /// peeled down to zero by the decomposer.
    pub remaining: f64,
}

/// Mapping from holding identifier to its list of owning funds.
///
/// Entry order within a holding's list follows fund input order. That order
/// is insignificant to the final bucket totals (the decomposer sorts by
/// weight), but it is stable for a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnershipIndex {
    owners: HashMap<String, Vec<OwnershipEntry>>,
}

impl OwnershipIndex {
    /// Builds the index from normalized funds.
    ///
    /// Each fund's identifiers are unique after normalization, so each fund
    /// appears at most once in any holding's owner list.
    #[must_use]
    pub fn build(funds: &[Fund]) -> Self {
        let mut owners: HashMap<String, Vec<OwnershipEntry>> = HashMap::new();
        for fund in funds {
            for holding in &fund.holdings {
                owners
                    .entry(holding.symbol.clone())
                    .or_default()
                    .push(OwnershipEntry {
                        fund: fund.ticker.clone(),
                        remaining: holding.weight,
                    });
            }
        }
        Self { owners }
    }

    /// The owner list for a holding, if any fund reports it.
    #[must_use]
    pub fn owners(&self, symbol: &str) -> Option<&[OwnershipEntry]> {
        self.owners.get(symbol).map(Vec::as_slice)
    }

    /// Number of distinct holdings in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// True if no fund reported any holding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterates over (holding, owner list) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OwnershipEntry])> {
        self.owners.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
