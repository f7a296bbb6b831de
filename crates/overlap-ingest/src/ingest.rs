//! The ingestion boundary.
//!
//! Takes raw profiles from a [`crate::ProfileSource`], drops funds that
//! cannot participate (non-positive net assets), normalizes the rest, and
//! accumulates every recoverable warning so the caller can report them once
//! per run.

use crate::error::IngestResult;
use overlap_analytics::{normalize_fund, OverlapConfig};
use overlap_core::{Fund, FundProfile, IngestWarning, OverlapError};
use tracing::warn;

/// The outcome of one ingestion pass: usable funds plus every warning raised.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    /// Normalized funds, in input order.
    pub funds: Vec<Fund>,

    /// Recoverable warnings, in the order they were raised.
    pub warnings: Vec<IngestWarning>,
}

impl IngestReport {
    /// True if any warning was raised.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Filters and normalizes raw profiles into decomposition-ready funds.
///
/// Funds with non-positive net assets are excluded with a
/// [`IngestWarning::FundExcluded`]; the rest run through the holdings
/// normalizer, whose warnings are appended. Fails with
/// [`OverlapError::NotEnoughFunds`] when fewer than two usable funds remain,
/// since no meaningful overlap exists to compute.
pub fn ingest_profiles(
    profiles: Vec<FundProfile>,
    config: &OverlapConfig,
) -> IngestResult<IngestReport> {
    let mut funds = Vec::with_capacity(profiles.len());
    let mut warnings = Vec::new();

    for profile in profiles {
        if !profile.is_usable() {
            let warning = IngestWarning::FundExcluded {
                ticker: profile.ticker.clone(),
                net_assets: profile.net_assets,
            };
            warn!(ticker = %profile.ticker, "{warning}");
            warnings.push(warning);
            continue;
        }

        let (fund, fund_warnings) = normalize_fund(&profile, config);
        warnings.extend(fund_warnings);
        funds.push(fund);
    }

    if funds.len() < 2 {
        return Err(OverlapError::not_enough_funds(funds.len()).into());
    }

    Ok(IngestReport { funds, warnings })
}
