//! # Overlap Ingest
//!
//! Profile sources and the ingestion boundary for ETF overlap analytics.
//!
//! This crate sits between the external profile provider and the pure
//! analytics pipeline:
//!
//! - [`ProfilePayload`] deserializes the provider's ETF profile JSON and
//!   validates it into a [`overlap_core::FundProfile`]
//! - [`ProfileSource`] is the seam a real fetcher implements;
//!   [`StaticProfileSource`] serves profiles from memory for tests
//! - [`ProfileCache`] persists one JSON file per uppercased ticker;
//!   [`CachedProfileSource`] wraps any source with it
//! - [`ingest_profiles`] filters unusable funds, runs the normalizer, and
//!   accumulates recoverable warnings into an [`IngestReport`]
//!
//! Network fetching, retry, and backoff are deliberately absent: implement
//! [`ProfileSource`] against your HTTP client of choice.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod error;
pub mod ingest;
pub mod payload;
pub mod source;

pub use cache::{CachedProfileSource, ProfileCache};
pub use error::{IngestError, IngestResult};
pub use ingest::{ingest_profiles, IngestReport};
pub use payload::{PayloadHolding, ProfilePayload};
pub use source::{ProfileSource, StaticProfileSource};
