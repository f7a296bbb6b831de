//! Configuration for overlap computation.

use serde::{Deserialize, Serialize};

/// Configuration for normalization and decomposition.
///
/// Controls the weight-sum sanity threshold and parallelism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapConfig {
    /// Minimum acceptable sum of a fund's holding weights, in percent of the
    /// fund. Funds below this emit a recoverable warning but are still used
    /// with their as-reported weights. The right value depends on the data
    /// provider's own rounding behavior.
    pub weight_sum_threshold: f64,

    /// Enable parallel decomposition (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum holding count to trigger parallel decomposition.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            weight_sum_threshold: 99.0,
            parallel: true,
            parallel_threshold: 256, // Use parallel if >256 holdings
        }
    }
}

impl OverlapConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the weight-sum sanity threshold, in percent.
    #[must_use]
    pub fn with_weight_sum_threshold(mut self, threshold: f64) -> Self {
        self.weight_sum_threshold = threshold;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given
    /// holding count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
