//! # Overlap Core
//!
//! Domain types for weighted ETF holdings overlap analytics.
//!
//! This crate provides the foundational building blocks used throughout the
//! workspace:
//!
//! - **Raw records**: [`FundProfile`] and [`RawHolding`] as the provider
//!   reports them (string weights, optional identifiers)
//! - **Normalized records**: [`Fund`] and [`Holding`] with numeric weights in
//!   a single documented unit
//! - **Membership signatures**: [`MembershipSignature`], the exact unordered
//!   set of funds attributed to one decomposition layer
//! - **Intersection buckets**: [`IntersectionBuckets`], accumulated layer
//!   weight keyed by signature
//!
//! ## Design Philosophy
//!
//! - **Set-keyed signatures**: two signatures are equal iff they contain the
//!   same funds, independent of discovery order
//! - **Additive buckets**: bucket merge is associative and commutative, so
//!   partial results from independent holdings combine safely
//! - **Plain data**: no I/O, no hidden state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;
pub mod warning;

pub use error::{OverlapError, OverlapResult};
pub use types::{
    BucketEntry, Fund, FundProfile, Holding, IntersectionBuckets, MembershipSignature, RawHolding,
};
pub use warning::IngestWarning;
