//! Raw, provider-shaped fund records.
//!
//! These carry the data exactly as the profile source reports it: weights are
//! still percentage strings (e.g. `"3.5%"`), identifiers may be missing or a
//! sentinel. The holdings normalizer turns a [`FundProfile`] into a
//! [`crate::Fund`].

use serde::{Deserialize, Serialize};

/// A fund's profile as reported by the provider, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundProfile {
    /// The fund's ticker, uppercased at the ingestion boundary.
    pub ticker: String,

    /// Total managed value. May be zero when the provider omits it; funds
    /// with non-positive net assets are excluded before normalization.
    pub net_assets: f64,

    /// Holdings in provider order.
    pub holdings: Vec<RawHolding>,
}

impl FundProfile {
    /// Creates a profile with no holdings.
    #[must_use]
    pub fn new(ticker: impl Into<String>, net_assets: f64) -> Self {
        Self {
            ticker: ticker.into(),
            net_assets,
            holdings: Vec::new(),
        }
    }

    /// Adds a raw holding.
    #[must_use]
    pub fn with_holding(mut self, holding: RawHolding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// True if the fund reports positive net assets.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.net_assets > 0.0
    }
}

/// One holding as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHolding {
    /// Instrument symbol. May be absent or the `"n/a"` sentinel, in which
    /// case the normalizer derives an identifier from the description.
    pub symbol: Option<String>,

    /// Free-text description of the instrument.
    pub description: Option<String>,

    /// Weight as a percentage string, e.g. `"3.5%"` or `"3.5"`. A missing
    /// weight reads as zero.
    pub weight: Option<String>,
}

impl RawHolding {
    /// Creates a raw holding with a symbol and a weight string.
    #[must_use]
    pub fn new(symbol: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            description: None,
            weight: Some(weight.into()),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
