//! Recoverable ingest warnings.
//!
//! Warnings accumulate during ingestion and normalization and are reported
//! once per run. The affected fund or holding stays in (or is skipped from)
//! the pipeline as documented per variant; none of these abort the run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recoverable condition observed while ingesting fund data.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IngestWarning {
    /// A fund's holdings weights sum below the sanity threshold.
    ///
    /// The fund proceeds with its as-reported weights.
    #[error("ETF {ticker} holdings only sum to {observed_pct:.1}%")]
    HoldingsSumLow {
        /// The fund's ticker.
        ticker: String,
        /// Observed weight sum, in percent of the fund.
        observed_pct: f64,
    },

    /// A holding carried neither a usable symbol nor a usable description
    /// and was skipped.
    #[error("ETF {ticker} holding #{position} has no symbol or description, skipped")]
    MalformedHolding {
        /// The fund's ticker.
        ticker: String,
        /// Zero-based position of the holding in the fund's reported list.
        position: usize,
    },

    /// A holding's weight could not be parsed (or was negative) and the
    /// holding was skipped.
    #[error("ETF {ticker} holding '{holding}' has unusable weight '{raw}', skipped")]
    UnusableWeight {
        /// The fund's ticker.
        ticker: String,
        /// The holding identifier.
        holding: String,
        /// The raw weight string as reported.
        raw: String,
    },

    /// A fund reported non-positive net assets and was excluded before
    /// normalization.
    #[error("ETF {ticker} has non-positive net assets ({net_assets}), excluded")]
    FundExcluded {
        /// The fund's ticker.
        ticker: String,
        /// The reported net assets value.
        net_assets: f64,
    },
}

impl IngestWarning {
    /// The ticker of the fund this warning concerns.
    #[must_use]
    pub fn ticker(&self) -> &str {
        match self {
            Self::HoldingsSumLow { ticker, .. }
            | Self::MalformedHolding { ticker, .. }
            | Self::UnusableWeight { ticker, .. }
            | Self::FundExcluded { ticker, .. } => ticker,
        }
    }
}
