//! Core domain types.
//!
//! - [`FundProfile`] / [`RawHolding`]: provider-shaped records, pre-normalization
//! - [`Fund`] / [`Holding`]: normalized records with numeric weights
//! - [`MembershipSignature`]: set-keyed identity of one decomposition layer
//! - [`IntersectionBuckets`] / [`BucketEntry`]: accumulated layer weight per signature

mod buckets;
mod fund;
mod profile;
mod signature;

pub use buckets::{BucketEntry, IntersectionBuckets};
pub use fund::{Fund, Holding};
pub use profile::{FundProfile, RawHolding};
pub use signature::MembershipSignature;
