//! # Overlap Analytics
//!
//! Weighted exact-membership decomposition of ETF holdings.
//!
//! Given several funds, each holding instruments at some weight, this crate
//! computes for every instrument which exact subset of funds hold it and
//! splits each instrument's weighted contributions into minimal exclusive
//! layers, so that every unit of weight is attributed to exactly one
//! membership signature. The aggregated result is one value per exact
//! intersection, the shape an UpSet-style chart consumes.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no hidden state
//! - **Set-keyed buckets**: signatures compare by set equality, never by
//!   discovery order
//! - **Config-driven parallelism**: optional rayon support with
//!   threshold-based switching; holdings decompose independently and partial
//!   buckets merge additively
//!
//! ## Pipeline
//!
//! ```rust
//! use overlap_analytics::prelude::*;
//! use overlap_core::Fund;
//!
//! let funds = vec![
//!     Fund::new("ALPHA", 1.0e9)
//!         .with_holding("AAPL", 500.0)
//!         .with_holding("MSFT", 300.0),
//!     Fund::new("BETA", 2.0e9)
//!         .with_holding("AAPL", 800.0),
//! ];
//!
//! let config = OverlapConfig::default();
//! let series = compute_overlap(&funds, &config).unwrap();
//! assert_eq!(series.len(), 3); // {ALPHA,BETA}, {BETA}, {ALPHA}
//! ```
//!
//! ## Module Overview
//!
//! - [`normalize`] - Holdings normalizer (percent strings to scaled weights)
//! - [`ownership`] - Ownership index builder (instrument to owner list)
//! - [`decompose`] - Exact-membership decomposer (greedy min-peel)
//! - [`series`] - Aggregate series builder for the visualization sink
//! - [`config`] - Computation configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: enable rayon-based parallel decomposition across holdings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decompose;
pub mod normalize;
pub mod ownership;
mod parallel;
pub mod pipeline;
pub mod series;

pub use config::OverlapConfig;
pub use decompose::decompose;
pub use normalize::{normalize_fund, WEIGHT_SCALE};
pub use ownership::{OwnershipEntry, OwnershipIndex};
pub use pipeline::compute_overlap;
pub use series::{OverlapSeries, SeriesRow};

/// Commonly used imports.
pub mod prelude {
    pub use crate::config::OverlapConfig;
    pub use crate::decompose::decompose;
    pub use crate::normalize::normalize_fund;
    pub use crate::ownership::OwnershipIndex;
    pub use crate::pipeline::compute_overlap;
    pub use crate::series::{OverlapSeries, SeriesRow};
    pub use overlap_core::{
        Fund, FundProfile, IngestWarning, IntersectionBuckets, MembershipSignature, OverlapError,
        OverlapResult, RawHolding,
    };
}
