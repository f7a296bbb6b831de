//! Provider payload DTOs.
//!
//! The profile endpoint returns JSON with string-typed numerics and, when
//! rate limited, a `Note` or `Information` field instead of data. These DTOs
//! mirror that shape; [`ProfilePayload::into_profile`] validates into the
//! domain [`FundProfile`].

use crate::error::{IngestError, IngestResult};
use chrono::{DateTime, Utc};
use overlap_core::{FundProfile, RawHolding};
use serde::{Deserialize, Serialize};

/// An ETF profile response as returned by the provider.
///
/// Unknown fields (sector tables and the like) are dropped on deserialize,
/// which also keeps them out of the cache files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// The requested ticker, stamped on by the fetcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    /// Total managed value as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_assets: Option<String>,

    /// Holdings with string-typed weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdings: Option<Vec<PayloadHolding>>,

    /// Rate-limit notice. Present instead of data when the quota is hit.
    #[serde(rename = "Note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Guidance notice, same role as `Note`.
    #[serde(rename = "Information", default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,

    /// When this payload was fetched, stamped on by the cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// One holding row in the provider payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadHolding {
    /// Instrument symbol, possibly the `"n/a"` sentinel.
    #[serde(default)]
    pub symbol: Option<String>,

    /// Free-text instrument description.
    #[serde(default)]
    pub description: Option<String>,

    /// Weight as a percentage string, e.g. `"3.5%"`.
    #[serde(default)]
    pub weight: Option<String>,
}

impl ProfilePayload {
    /// Validates the payload into a raw [`FundProfile`] for `ticker`.
    ///
    /// Fails when the provider signalled rate limiting or the payload has no
    /// holdings list. An unparseable `net_assets` reads as zero; the
    /// ingestion boundary then excludes the fund with a warning.
    pub fn into_profile(self, ticker: &str) -> IngestResult<FundProfile> {
        if let Some(note) = self.note.or(self.information) {
            return Err(IngestError::rate_limited(note));
        }

        let holdings = self
            .holdings
            .ok_or_else(|| IngestError::malformed(ticker, "response has no holdings"))?;

        let net_assets = self
            .net_assets
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        Ok(FundProfile {
            ticker: ticker.to_uppercase(),
            net_assets,
            holdings: holdings
                .into_iter()
                .map(|h| RawHolding {
                    symbol: h.symbol,
                    description: h.description,
                    weight: h.weight,
                })
                .collect(),
        })
    }

    /// Stamps the fetch time, returning self for chaining.
    #[must_use]
    pub fn with_fetched_at(mut self, at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_JSON: &str = r#"{
        "net_assets": "451000000000",
        "holdings": [
            {"symbol": "AAPL", "description": "APPLE INC", "weight": "7.1%"},
            {"symbol": "n/a", "description": "US Dollar Cash", "weight": "0.4%"}
        ],
        "sectors": [{"sector": "TECHNOLOGY", "weight": "0.31"}]
    }"#;

    #[test]
    fn test_deserialize_and_validate() {
        let payload: ProfilePayload = serde_json::from_str(PROFILE_JSON).unwrap();
        let profile = payload.into_profile("spy").unwrap();
        assert_eq!(profile.ticker, "SPY");
        assert_eq!(profile.net_assets, 4.51e11);
        assert_eq!(profile.holdings.len(), 2);
        assert_eq!(profile.holdings[0].symbol.as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_unknown_fields_dropped_from_cache_shape() {
        let payload: ProfilePayload = serde_json::from_str(PROFILE_JSON).unwrap();
        let reserialized = serde_json::to_string(&payload).unwrap();
        assert!(!reserialized.contains("sectors"));
    }

    #[test]
    fn test_rate_limit_note_is_an_error() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"Note": "API call frequency is 25 calls per day"}"#).unwrap();
        let err = payload.into_profile("SPY").unwrap_err();
        assert!(matches!(err, IngestError::RateLimited { .. }));
    }

    #[test]
    fn test_missing_holdings_is_malformed() {
        let payload: ProfilePayload = serde_json::from_str(r#"{"net_assets": "10"}"#).unwrap();
        let err = payload.into_profile("SPY").unwrap_err();
        assert!(matches!(err, IngestError::MalformedResponse { .. }));
    }

    #[test]
    fn test_unparseable_net_assets_reads_zero() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"net_assets": "n/a", "holdings": []}"#).unwrap();
        let profile = payload.into_profile("SPY").unwrap();
        assert_eq!(profile.net_assets, 0.0);
        assert!(!profile.is_usable());
    }
}
