//! Error types for overlap analytics.
//!
//! Warnings that do not abort a run live in [`crate::warning`]; this module
//! holds the fatal conditions.

use thiserror::Error;

/// Result type for overlap operations.
pub type OverlapResult<T> = Result<T, OverlapError>;

/// Errors that can occur while computing holdings overlap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlapError {
    /// Fewer than two usable funds remain after ingestion filtering.
    ///
    /// An overlap chart over zero or one fund is meaningless, so the run
    /// aborts rather than producing a degenerate series.
    #[error("Need at least two usable funds to compute overlap, got {count}")]
    NotEnoughFunds {
        /// Number of usable funds that survived filtering.
        count: usize,
    },

    /// A fund carries an invalid (non-finite) weight that survived
    /// normalization. Normalized inputs should never trigger this.
    #[error("Invalid weight {value} for holding '{holding}' in fund '{fund}'")]
    InvalidWeight {
        /// The owning fund's ticker.
        fund: String,
        /// The holding identifier.
        holding: String,
        /// The offending weight value, formatted.
        value: String,
    },
}

impl OverlapError {
    /// Create a not-enough-funds error.
    #[must_use]
    pub fn not_enough_funds(count: usize) -> Self {
        Self::NotEnoughFunds { count }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub fn invalid_weight(fund: impl Into<String>, holding: impl Into<String>, value: f64) -> Self {
        Self::InvalidWeight {
            fund: fund.into(),
            holding: holding.into(),
            value: value.to_string(),
        }
    }
}
