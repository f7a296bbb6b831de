//! JSON file cache for fund profiles.
//!
//! One file per uppercased ticker under a data directory, mirroring the
//! provider payload shape plus a `fetched_at` stamp. A corrupt or missing
//! file reads as a miss. There is no expiry: profile endpoints are heavily
//! rate limited, so a stale profile beats a burned call; pass
//! `force_refresh` to go upstream anyway.

use crate::error::IngestResult;
use crate::payload::ProfilePayload;
use crate::source::ProfileSource;
use chrono::Utc;
use overlap_core::FundProfile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed cache of provider payloads, keyed by uppercased ticker.
#[derive(Debug, Clone)]
pub struct ProfileCache {
    dir: PathBuf,
}

impl ProfileCache {
    /// Creates a cache rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> IngestResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The cache file path for a ticker.
    #[must_use]
    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{}.json", ticker.trim().to_uppercase()))
    }

    /// Loads the cached payload for a ticker, `None` on miss or corruption.
    #[must_use]
    pub fn load(&self, ticker: &str) -> Option<ProfilePayload> {
        let path = self.path_for(ticker);
        let data = fs::read(&path).ok()?;
        match serde_json::from_slice(&data) {
            Ok(payload) => {
                debug!(ticker, path = %path.display(), "cache hit");
                Some(payload)
            }
            Err(err) => {
                debug!(ticker, %err, "cache entry unreadable, treating as miss");
                None
            }
        }
    }

    /// Stores a payload for a ticker, stamping the fetch time.
    pub fn store(&self, ticker: &str, payload: &ProfilePayload) -> IngestResult<()> {
        let stamped = payload.clone().with_fetched_at(Utc::now());
        let path = self.path_for(ticker);
        fs::write(&path, serde_json::to_vec_pretty(&stamped)?)?;
        debug!(ticker, path = %path.display(), "cache store");
        Ok(())
    }

    /// The cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Wraps a [`ProfileSource`] with a [`ProfileCache`].
///
/// Serves from the cache unless `force_refresh` is set; successful upstream
/// fetches are written back as payloads.
#[derive(Debug, Clone)]
pub struct CachedProfileSource<S> {
    inner: S,
    cache: ProfileCache,
}

impl<S: ProfileSource> CachedProfileSource<S> {
    /// Creates a cached wrapper around `inner`.
    #[must_use]
    pub fn new(inner: S, cache: ProfileCache) -> Self {
        Self { inner, cache }
    }
}

impl<S: ProfileSource> ProfileSource for CachedProfileSource<S> {
    fn fetch(&self, ticker: &str, force_refresh: bool) -> IngestResult<FundProfile> {
        if !force_refresh {
            if let Some(payload) = self.cache.load(ticker) {
                return payload.into_profile(ticker);
            }
        }

        let profile = self.inner.fetch(ticker, force_refresh)?;
        let payload = payload_from_profile(&profile);
        self.cache.store(ticker, &payload)?;
        Ok(profile)
    }
}

/// Re-shapes a validated profile back into the payload form for caching.
fn payload_from_profile(profile: &FundProfile) -> ProfilePayload {
    ProfilePayload {
        ticker: Some(profile.ticker.clone()),
        net_assets: Some(profile.net_assets.to_string()),
        holdings: Some(
            profile
                .holdings
                .iter()
                .map(|h| crate::payload::PayloadHolding {
                    symbol: h.symbol.clone(),
                    description: h.description.clone(),
                    weight: h.weight.clone(),
                })
                .collect(),
        ),
        note: None,
        information: None,
        fetched_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticProfileSource;
    use overlap_core::RawHolding;
    use std::cell::Cell;

    fn profile() -> FundProfile {
        FundProfile::new("SPY", 4.5e11).with_holding(RawHolding::new("AAPL", "7.1%"))
    }

    #[test]
    fn test_roundtrip_through_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ProfileCache::new(dir.path()).unwrap();

        let payload = payload_from_profile(&profile());
        cache.store("spy", &payload).unwrap();

        assert!(cache.path_for("SPY").exists());
        let loaded = cache.load("SPY").unwrap();
        assert!(loaded.fetched_at.is_some());
        let back = loaded.into_profile("SPY").unwrap();
        assert_eq!(back, profile());
    }

    #[test]
    fn test_corrupt_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ProfileCache::new(dir.path()).unwrap();
        fs::write(cache.path_for("SPY"), b"not json").unwrap();
        assert!(cache.load("SPY").is_none());
    }

    /// Source that counts upstream fetches.
    struct CountingSource {
        inner: StaticProfileSource,
        calls: Cell<usize>,
    }

    impl ProfileSource for CountingSource {
        fn fetch(&self, ticker: &str, force_refresh: bool) -> IngestResult<FundProfile> {
            self.calls.set(self.calls.get() + 1);
            self.inner.fetch(ticker, force_refresh)
        }
    }

    #[test]
    fn test_cached_source_skips_upstream_on_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ProfileCache::new(dir.path()).unwrap();
        let source = CachedProfileSource::new(
            CountingSource {
                inner: StaticProfileSource::new().with_profile(profile()),
                calls: Cell::new(0),
            },
            cache,
        );

        assert_eq!(source.fetch("SPY", false).unwrap(), profile());
        assert_eq!(source.inner.calls.get(), 1);

        // Second fetch is served from the cache file.
        assert_eq!(source.fetch("SPY", false).unwrap(), profile());
        assert_eq!(source.inner.calls.get(), 1);

        // force_refresh bypasses the cache.
        assert_eq!(source.fetch("SPY", true).unwrap(), profile());
        assert_eq!(source.inner.calls.get(), 2);
    }
}
