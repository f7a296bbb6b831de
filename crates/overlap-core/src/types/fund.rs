//! Normalized fund and holding records.

use serde::{Deserialize, Serialize};

/// A fund after normalization: numeric weights in a single unit, every
/// holding carrying a non-empty identifier.
///
/// Immutable once produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// The fund's ticker.
    pub ticker: String,

    /// Total managed value, as reported.
    pub net_assets: f64,

    /// Holdings in first-seen order, each identifier unique within the fund.
    pub holdings: Vec<Holding>,
}

impl Fund {
    /// Creates a fund with no holdings.
    #[must_use]
    pub fn new(ticker: impl Into<String>, net_assets: f64) -> Self {
        Self {
            ticker: ticker.into(),
            net_assets,
            holdings: Vec::new(),
        }
    }

    /// Adds a holding.
    #[must_use]
    pub fn with_holding(mut self, symbol: impl Into<String>, weight: f64) -> Self {
        self.holdings.push(Holding {
            symbol: symbol.into(),
            weight,
        });
        self
    }

    /// Sum of all holding weights, in the normalized (scaled) unit.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight).sum()
    }

    /// Looks up a holding by identifier.
    #[must_use]
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// True if the fund has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// One normalized holding: a non-empty identifier and a non-negative weight.
///
/// The weight unit is percent-of-fund multiplied by 100 (see the normalizer's
/// `WEIGHT_SCALE`): a holding at 3.5% of its fund carries weight 350.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Instrument identifier, never empty after normalization.
    pub symbol: String,

    /// Weight in the scaled unit, non-negative.
    pub weight: f64,
}
