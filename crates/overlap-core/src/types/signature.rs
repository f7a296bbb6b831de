//! Membership signatures: the exact, unordered set of funds attributed to
//! one decomposition layer.
//!
//! Signatures are compared by set equality. Keying buckets by discovery-order
//! lists would split one true intersection into near-duplicate rows whenever
//! two holdings meet the same funds in a different order; the `BTreeSet`
//! representation makes that impossible and gives a canonical sorted order
//! for display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The exact unordered set of fund tickers active in one decomposition layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MembershipSignature(BTreeSet<String>);

impl MembershipSignature {
    /// Creates an empty signature.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a signature from fund tickers, deduplicating and ordering
    /// canonically.
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(members.into_iter().map(Into::into).collect())
    }

    /// The member tickers in canonical (sorted) order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of funds in the signature (the intersection degree).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    /// True if no funds are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if exactly one fund is present (an exclusively-held layer).
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// True if the given ticker is a member.
    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.0.contains(ticker)
    }
}

impl Default for MembershipSignature {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for MembershipSignature {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_members(iter)
    }
}

impl fmt::Display for MembershipSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for member in &self.0 {
            if !first {
                write!(f, "&")?;
            }
            write!(f, "{member}")?;
            first = false;
        }
        Ok(())
    }
}
