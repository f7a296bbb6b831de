//! Holdings normalizer.
//!
//! Converts a raw, provider-shaped [`FundProfile`] into a clean [`Fund`]:
//! numeric weights in one documented unit, every holding carrying a usable
//! identifier, duplicates collapsed. Recoverable problems are reported as
//! [`IngestWarning`]s; nothing here aborts the run.

use crate::config::OverlapConfig;
use overlap_core::{Fund, FundProfile, IngestWarning, RawHolding};
use tracing::warn;

/// Scale applied to parsed percent weights.
///
/// Weights are stored as percent-of-fund multiplied by this factor: `"3.5%"`
/// becomes 350.0. The extra headroom keeps small holdings away from the
/// bottom of the float range when many funds are multiplied through. Tests
/// pin this convention; do not change it silently.
pub const WEIGHT_SCALE: f64 = 100.0;

/// Sentinel the provider reports when an instrument has no ticker.
const NO_SYMBOL: &str = "n/a";

/// Normalizes one fund's raw holdings.
///
/// Returns the normalized fund together with any warnings raised:
///
/// - holdings with neither a usable symbol nor a usable description are
///   skipped ([`IngestWarning::MalformedHolding`]);
/// - holdings whose weight fails to parse or is negative are skipped
///   ([`IngestWarning::UnusableWeight`]); a missing weight reads as zero;
/// - duplicate identifiers within the fund merge by summing weight, so two
///   `"n/a"` holdings sharing a description collide into one entry;
/// - a fund whose percent weights sum below
///   [`OverlapConfig::weight_sum_threshold`] gets a
///   [`IngestWarning::HoldingsSumLow`] but proceeds as reported.
pub fn normalize_fund(
    profile: &FundProfile,
    config: &OverlapConfig,
) -> (Fund, Vec<IngestWarning>) {
    let mut fund = Fund::new(profile.ticker.clone(), profile.net_assets);
    let mut warnings = Vec::new();
    let mut pct_sum = 0.0;

    for (position, raw) in profile.holdings.iter().enumerate() {
        let Some(symbol) = resolve_symbol(raw) else {
            warnings.push(IngestWarning::MalformedHolding {
                ticker: profile.ticker.clone(),
                position,
            });
            continue;
        };

        let raw_weight = raw.weight.as_deref().unwrap_or("0");
        let Some(pct) = parse_percent(raw_weight) else {
            warnings.push(IngestWarning::UnusableWeight {
                ticker: profile.ticker.clone(),
                holding: symbol,
                raw: raw_weight.to_string(),
            });
            continue;
        };

        pct_sum += pct;
        let weight = pct * WEIGHT_SCALE;
        if let Some(pos) = fund.holdings.iter().position(|h| h.symbol == symbol) {
            fund.holdings[pos].weight += weight;
        } else {
            fund = fund.with_holding(symbol, weight);
        }
    }

    if pct_sum < config.weight_sum_threshold {
        warnings.push(IngestWarning::HoldingsSumLow {
            ticker: profile.ticker.clone(),
            observed_pct: pct_sum,
        });
    }

    for warning in &warnings {
        warn!(ticker = %profile.ticker, "{warning}");
    }

    (fund, warnings)
}

/// Resolves a raw holding's identifier.
///
/// Uses the reported symbol unless it is missing, empty, or the `"n/a"`
/// sentinel; falls back to the description uppercased with spaces replaced by
/// underscores. Returns `None` when neither is usable.
fn resolve_symbol(raw: &RawHolding) -> Option<String> {
    if let Some(symbol) = raw.symbol.as_deref() {
        let trimmed = symbol.trim();
        if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(NO_SYMBOL) {
            return Some(trimmed.to_string());
        }
    }
    let description = raw.description.as_deref()?.trim();
    if description.is_empty() {
        return None;
    }
    Some(description.to_uppercase().replace(' ', "_"))
}

/// Parses a percent string like `"3.5%"` or `"3.5"` into a non-negative f64.
fn parse_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> OverlapConfig {
        OverlapConfig::default()
    }

    fn profile(holdings: Vec<RawHolding>) -> FundProfile {
        FundProfile {
            ticker: "TEST".to_string(),
            net_assets: 1.0e9,
            holdings,
        }
    }

    #[test]
    fn test_percent_parsing_and_scale() {
        let p = profile(vec![
            RawHolding::new("AAPL", "7.1%"),
            RawHolding::new("MSFT", "92.9"),
        ]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert!(warnings.is_empty());
        // Unit convention: percent-of-fund times 100.
        assert_relative_eq!(fund.holding("AAPL").unwrap().weight, 710.0);
        assert_relative_eq!(fund.holding("MSFT").unwrap().weight, 9290.0);
    }

    #[test]
    fn test_sentinel_symbol_rekeyed_from_description() {
        let p = profile(vec![
            RawHolding {
                symbol: Some("n/a".to_string()),
                description: Some("US Treasury Bill".to_string()),
                weight: Some("60%".to_string()),
            },
            RawHolding {
                symbol: None,
                description: Some("US Treasury Bill".to_string()),
                weight: Some("40%".to_string()),
            },
        ]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert!(warnings.is_empty());
        // Same description, no ticker: both collide into one identifier.
        assert_eq!(fund.len(), 1);
        assert_relative_eq!(fund.holding("US_TREASURY_BILL").unwrap().weight, 10_000.0);
    }

    #[test]
    fn test_malformed_holding_skipped_with_warning() {
        let p = profile(vec![
            RawHolding {
                symbol: Some("n/a".to_string()),
                description: None,
                weight: Some("50%".to_string()),
            },
            RawHolding::new("AAPL", "99.5%"),
        ]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert_eq!(fund.len(), 1);
        assert_eq!(
            warnings,
            vec![IngestWarning::MalformedHolding {
                ticker: "TEST".to_string(),
                position: 0,
            }]
        );
    }

    #[test]
    fn test_unusable_weight_skipped_with_warning() {
        let p = profile(vec![
            RawHolding::new("AAPL", "not-a-number"),
            RawHolding::new("MSFT", "-3%"),
            RawHolding::new("NVDA", "100%"),
        ]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert_eq!(fund.len(), 1);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(&warnings[0], IngestWarning::UnusableWeight { holding, .. } if holding == "AAPL"));
        assert!(matches!(&warnings[1], IngestWarning::UnusableWeight { holding, .. } if holding == "MSFT"));
    }

    #[test]
    fn test_missing_weight_reads_as_zero() {
        let p = profile(vec![
            RawHolding {
                symbol: Some("AAPL".to_string()),
                description: None,
                weight: None,
            },
            RawHolding::new("MSFT", "100%"),
        ]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert!(warnings.is_empty());
        assert_relative_eq!(fund.holding("AAPL").unwrap().weight, 0.0);
    }

    #[test]
    fn test_low_weight_sum_warns_but_keeps_fund() {
        let p = profile(vec![RawHolding::new("AAPL", "42%")]);
        let (fund, warnings) = normalize_fund(&p, &config());
        assert_eq!(fund.len(), 1);
        assert_eq!(
            warnings,
            vec![IngestWarning::HoldingsSumLow {
                ticker: "TEST".to_string(),
                observed_pct: 42.0,
            }]
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let p = profile(vec![RawHolding::new("AAPL", "42%")]);
        let relaxed = OverlapConfig::default().with_weight_sum_threshold(40.0);
        let (_, warnings) = normalize_fund(&p, &relaxed);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_symbols_merge() {
        let p = profile(vec![
            RawHolding::new("GOOGL", "30%"),
            RawHolding::new("GOOGL", "70%"),
        ]);
        let (fund, _) = normalize_fund(&p, &config());
        assert_eq!(fund.len(), 1);
        assert_relative_eq!(fund.holding("GOOGL").unwrap().weight, 10_000.0);
    }
}
