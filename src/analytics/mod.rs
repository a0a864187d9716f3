//! IV analytics pipeline
//!
//! Turns parsed chains into the two numbers the dashboard runs on:
//!
//! 1. **Chain IV**: per-strike IV solves near spot, aggregated into one
//!    representative percentage
//! 2. **IV percentile**: rank of that figure against the symbol's history
//!
//! Plus the end-of-day snapshot types the storage layer persists.

mod aggregate;
mod config;
mod percentile;
mod snapshot;

pub use aggregate::*;
pub use config::*;
pub use percentile::*;
pub use snapshot::*;

/// Round to 2 decimal places; every percentage leaving this crate goes
/// through here
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use crate::core::OptionChain;

/// The (IV, percentile) pair for one chain snapshot
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IvMetrics {
    /// Chain IV percentage, 2dp
    pub iv: Option<f64>,
    /// Percentile of `iv` against the historical series, 2dp
    pub percentile: Option<f64>,
}

/// Compute chain IV and its historical percentile in one call.
///
/// `historical` is the caller-supplied IV series (most-recent-first, one
/// symbol). The percentile is only meaningful when an IV was computed, so a
/// failed aggregation yields `{ iv: None, percentile: None }`.
pub fn iv_metrics(
    chain: &OptionChain,
    spot: f64,
    years_to_expiry: f64,
    historical: &[f64],
    config: &IvConfig,
) -> IvMetrics {
    let calc = ChainIvCalculator::with_config(config.clone());

    let iv = calc.chain_iv(chain, spot, years_to_expiry);
    let percentile = iv.and_then(|current| iv_percentile(historical, current));

    IvMetrics { iv, percentile }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionType, StrikeQuote};
    use crate::models::black_scholes;
    use chrono::NaiveDate;

    #[test]
    fn test_iv_metrics_pair() {
        let spot = 18060.0;
        let tte = 30.0 / 365.25;

        let mut chain = OptionChain::new("NIFTY", NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
        let mut quote = StrikeQuote::new(18050.0);
        quote.call.ltp = Some(black_scholes::price(
            spot,
            18050.0,
            tte,
            0.065,
            0.22,
            OptionType::Call,
        ));
        chain.quotes.push(quote);

        let history = [15.0, 18.0, 20.0, 25.0, 30.0];
        let metrics = iv_metrics(&chain, spot, tte, &history, &IvConfig::default());

        let iv = metrics.iv.unwrap();
        assert!((iv - 22.0).abs() < 0.1);
        // Three of five historical values sit below ~22
        assert_eq!(metrics.percentile, Some(60.0));
    }

    #[test]
    fn test_iv_metrics_no_data() {
        let chain = OptionChain::new("NIFTY", NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
        let metrics = iv_metrics(&chain, 18060.0, 0.1, &[15.0], &IvConfig::default());

        assert_eq!(metrics.iv, None);
        assert_eq!(metrics.percentile, None);
    }

    #[test]
    fn test_iv_metrics_empty_history() {
        let spot = 18060.0;
        let tte = 30.0 / 365.25;

        let mut chain = OptionChain::new("NIFTY", NaiveDate::from_ymd_opt(2025, 1, 30).unwrap());
        let mut quote = StrikeQuote::new(18050.0);
        quote.call.ltp = Some(black_scholes::price(
            spot,
            18050.0,
            tte,
            0.065,
            0.22,
            OptionType::Call,
        ));
        chain.quotes.push(quote);

        let metrics = iv_metrics(&chain, spot, tte, &[], &IvConfig::default());
        assert!(metrics.iv.is_some());
        assert_eq!(metrics.percentile, None);
    }
}
