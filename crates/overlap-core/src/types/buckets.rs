//! Intersection buckets: accumulated layer weight keyed by membership
//! signature.
//!
//! Built fresh per decomposition run. `add` and `merge` are additive, so
//! buckets produced from disjoint sets of holdings combine in any order to
//! the same totals.

use super::MembershipSignature;
use std::collections::HashMap;

/// Accumulated value for one membership signature.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketEntry {
    /// Total weight attributed to this signature.
    pub value: f64,

    /// Number of distinct holdings that contributed at least one layer.
    pub holdings: usize,
}

/// Mapping from membership signature to accumulated weight.
///
/// Not serialized directly: signatures are set-valued keys, which JSON maps
/// cannot represent. The aggregate series is the serializable surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionBuckets {
    buckets: HashMap<MembershipSignature, BucketEntry>,
}

impl IntersectionBuckets {
    /// Creates an empty bucket set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one layer's weight to a signature's bucket, creating the bucket
    /// on first sight.
    ///
    /// Within one holding's decomposition the signature strictly shrinks per
    /// layer, so each holding calls this at most once per signature; the
    /// `holdings` count therefore counts distinct holdings.
    pub fn add(&mut self, signature: MembershipSignature, value: f64) {
        let entry = self.buckets.entry(signature).or_default();
        entry.value += value;
        entry.holdings += 1;
    }

    /// Additively merges another bucket set into this one.
    pub fn merge(&mut self, other: IntersectionBuckets) {
        for (signature, entry) in other.buckets {
            let slot = self.buckets.entry(signature).or_default();
            slot.value += entry.value;
            slot.holdings += entry.holdings;
        }
    }

    /// Looks up the entry for a signature.
    #[must_use]
    pub fn get(&self, signature: &MembershipSignature) -> Option<&BucketEntry> {
        self.buckets.get(signature)
    }

    /// The accumulated value for a signature, zero if unseen.
    #[must_use]
    pub fn value(&self, signature: &MembershipSignature) -> f64 {
        self.buckets.get(signature).map_or(0.0, |e| e.value)
    }

    /// Number of distinct signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no signature has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all accumulated values across signatures.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.buckets.values().map(|e| e.value).sum()
    }

    /// Iterates over (signature, entry) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&MembershipSignature, &BucketEntry)> {
        self.buckets.iter()
    }
}

impl IntoIterator for IntersectionBuckets {
    type Item = (MembershipSignature, BucketEntry);
    type IntoIter = std::collections::hash_map::IntoIter<MembershipSignature, BucketEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sig(members: &[&str]) -> MembershipSignature {
        MembershipSignature::from_members(members.iter().copied())
    }

    #[test]
    fn test_add_accumulates() {
        let mut buckets = IntersectionBuckets::new();
        buckets.add(sig(&["A", "B"]), 3.0);
        buckets.add(sig(&["B", "A"]), 2.0);
        assert_eq!(buckets.len(), 1);
        assert_relative_eq!(buckets.value(&sig(&["A", "B"])), 5.0);
        assert_eq!(buckets.get(&sig(&["A", "B"])).unwrap().holdings, 2);
    }

    #[test]
    fn test_merge_is_additive() {
        let mut left = IntersectionBuckets::new();
        left.add(sig(&["A"]), 1.0);
        left.add(sig(&["A", "B"]), 2.0);

        let mut right = IntersectionBuckets::new();
        right.add(sig(&["A", "B"]), 3.0);
        right.add(sig(&["C"]), 4.0);

        left.merge(right);
        assert_eq!(left.len(), 3);
        assert_relative_eq!(left.value(&sig(&["A", "B"])), 5.0);
        assert_relative_eq!(left.total_value(), 10.0);
    }

    #[test]
    fn test_merge_commutes() {
        let mut a = IntersectionBuckets::new();
        a.add(sig(&["A"]), 1.5);
        let mut b = IntersectionBuckets::new();
        b.add(sig(&["A"]), 2.5);
        b.add(sig(&["B"]), 1.0);

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_unseen_signature_is_zero() {
        let buckets = IntersectionBuckets::new();
        assert_relative_eq!(buckets.value(&sig(&["X"])), 0.0);
        assert!(buckets.is_empty());
    }
}
