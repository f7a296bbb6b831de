//! The profile source seam.
//!
//! A [`ProfileSource`] hands back one fund's raw profile per ticker. The
//! analytics pipeline is synchronous, so the trait is too; an async fetcher
//! can block on its runtime inside `fetch`.

use crate::error::{IngestError, IngestResult};
use overlap_core::FundProfile;
use std::collections::HashMap;

/// Supplies fund profiles by ticker.
pub trait ProfileSource {
    /// Fetches the profile for `ticker`.
    ///
    /// `force_refresh` asks the source to bypass any cache it maintains.
    /// Tickers are matched case-insensitively.
    fn fetch(&self, ticker: &str, force_refresh: bool) -> IngestResult<FundProfile>;
}

/// In-memory profile source for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    profiles: HashMap<String, FundProfile>,
}

impl StaticProfileSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile, keyed by its uppercased ticker.
    #[must_use]
    pub fn with_profile(mut self, profile: FundProfile) -> Self {
        self.profiles.insert(profile.ticker.to_uppercase(), profile);
        self
    }
}

impl ProfileSource for StaticProfileSource {
    fn fetch(&self, ticker: &str, _force_refresh: bool) -> IngestResult<FundProfile> {
        let key = ticker.trim().to_uppercase();
        if key.is_empty() {
            return Err(IngestError::EmptyTicker);
        }
        self.profiles
            .get(&key)
            .cloned()
            .ok_or(IngestError::NotFound { ticker: key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_lookup() {
        let source =
            StaticProfileSource::new().with_profile(FundProfile::new("SPY", 1.0e9));
        assert_eq!(source.fetch("spy", false).unwrap().ticker, "SPY");
        assert!(matches!(
            source.fetch("QQQ", false),
            Err(IngestError::NotFound { .. })
        ));
        assert!(matches!(
            source.fetch("  ", false),
            Err(IngestError::EmptyTicker)
        ));
    }
}
