//! Error types for profile ingestion.

use overlap_core::OverlapError;
use thiserror::Error;

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while sourcing or ingesting fund profiles.
#[derive(Error, Debug)]
pub enum IngestError {
    /// A ticker was empty or whitespace.
    #[error("Empty ticker")]
    EmptyTicker,

    /// The provider signalled rate limiting instead of returning a profile.
    #[error("Rate limited by provider: {note}")]
    RateLimited {
        /// The provider's note text.
        note: String,
    },

    /// The response could not be interpreted as a fund profile.
    #[error("Malformed profile response for {ticker}: {reason}")]
    MalformedResponse {
        /// The requested ticker.
        ticker: String,
        /// What was wrong with the response.
        reason: String,
    },

    /// No profile is available for the ticker (no cache entry and no
    /// upstream source).
    #[error("No profile available for {ticker}")]
    NotFound {
        /// The requested ticker.
        ticker: String,
    },

    /// Cache file I/O failed.
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache payload could not be encoded.
    #[error("Cache encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fatal condition from the analytics core.
    #[error(transparent)]
    Overlap(#[from] OverlapError),
}

impl IngestError {
    /// Create a malformed response error.
    #[must_use]
    pub fn malformed(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create a rate limited error.
    #[must_use]
    pub fn rate_limited(note: impl Into<String>) -> Self {
        Self::RateLimited { note: note.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::malformed("SPY", "missing holdings");
        assert!(err.to_string().contains("SPY"));
        assert!(err.to_string().contains("missing holdings"));

        let err = IngestError::from(OverlapError::not_enough_funds(1));
        assert!(err.to_string().contains("at least two"));
    }
}
