//! Implied volatility solver
//!
//! Inverts the Black-Scholes model against an observed premium:
//! Newton-Raphson first, bisection when Newton cannot be trusted.
//!
//! Newton-Raphson converges in a handful of iterations near typical
//! volatility, but deep OTM / near-expiry options sit on a vega plateau where
//! the step size explodes. Bisection is slower and always converges on a
//! valid bracket, so non-convergence is treated as a signal to switch
//! methods, not as an error.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::models::black_scholes;

/// Solver bounds and tolerances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Starting volatility guess for Newton-Raphson
    /// Default: 0.20
    pub initial_guess: f64,

    /// Iteration cap, applied to each method separately
    /// Default: 100
    pub max_iterations: u32,

    /// Convergence tolerance: on the vol step for Newton-Raphson,
    /// on the price error for bisection
    /// Default: 1e-4
    pub tolerance: f64,

    /// Lower volatility bound (0.1%)
    /// Default: 0.001
    pub vol_lo: f64,

    /// Upper volatility bound (500%)
    /// Default: 5.0
    pub vol_hi: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.20,
            max_iterations: 100,
            tolerance: 1e-4,
            vol_lo: 0.001,
            vol_hi: 5.0,
        }
    }
}

/// Solve for the volatility that reprices `market_price`.
///
/// Returns `None` when neither Newton-Raphson nor bisection finds a root,
/// which includes premiums outside the range spanned by the volatility
/// bounds. Callers treat a `None` strike as having no usable IV and move on.
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    market_price: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> Option<f64> {
    let mut vol = config.initial_guess;

    for _ in 0..config.max_iterations {
        let price = black_scholes::price(spot, strike, time, rate, vol, option_type);
        let vega = black_scholes::vega(spot, strike, time, rate, vol);

        if vega == 0.0 {
            // Vega plateau: Newton step undefined
            return bisection_iv(spot, strike, time, rate, market_price, option_type, config);
        }

        let next = (vol - (price - market_price) / vega).clamp(config.vol_lo, config.vol_hi);

        if (next - vol).abs() < config.tolerance {
            return Some(next);
        }

        vol = next;
    }

    bisection_iv(spot, strike, time, rate, market_price, option_type, config)
}

/// Bisection fallback over [vol_lo, vol_hi].
///
/// Price is monotone increasing in volatility for T > 0, so a premium outside
/// [price(lo), price(hi)] has no root in the bracket and the solve fails.
fn bisection_iv(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    market_price: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> Option<f64> {
    let mut lo = config.vol_lo;
    let mut hi = config.vol_hi;

    let price_lo = black_scholes::price(spot, strike, time, rate, lo, option_type);
    let price_hi = black_scholes::price(spot, strike, time, rate, hi, option_type);

    if market_price < price_lo || market_price > price_hi {
        return None;
    }

    for _ in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let price_mid = black_scholes::price(spot, strike, time, rate, mid, option_type);

        if (price_mid - market_price).abs() < config.tolerance {
            return Some(mid);
        }

        if price_mid < market_price {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // Bracket is narrow enough to call it a root
    Some((lo + hi) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPOT: f64 = 18000.0;
    const RATE: f64 = 0.065;

    #[test]
    fn test_round_trip_atm() {
        let config = SolverConfig::default();
        let time = 30.0 / 365.0;

        for &true_vol in &[0.05, 0.12, 0.22, 0.45, 1.0] {
            let premium =
                black_scholes::price(SPOT, 18000.0, time, RATE, true_vol, OptionType::Call);
            let iv = implied_volatility(
                SPOT,
                18000.0,
                time,
                RATE,
                premium,
                OptionType::Call,
                &config,
            )
            .unwrap();

            assert!(
                (iv - true_vol).abs() < 0.001,
                "recovered {} for true vol {}",
                iv,
                true_vol
            );
        }
    }

    #[test]
    fn test_round_trip_otm_put() {
        let config = SolverConfig::default();
        let time = 14.0 / 365.0;
        let strike = 17200.0;

        let premium = black_scholes::price(SPOT, strike, time, RATE, 0.30, OptionType::Put);
        let iv =
            implied_volatility(SPOT, strike, time, RATE, premium, OptionType::Put, &config)
                .unwrap();

        assert!((iv - 0.30).abs() < 0.001);
    }

    #[test]
    fn test_price_out_of_range() {
        let config = SolverConfig::default();
        let time = 7.0 / 365.0;

        // Premium above what 500% vol can produce
        let absurd = SPOT * 2.0;
        assert_eq!(
            implied_volatility(SPOT, 18000.0, time, RATE, absurd, OptionType::Call, &config),
            None
        );

        // Premium below intrinsic for a deep ITM call
        let below_intrinsic = 1.0;
        assert_eq!(
            implied_volatility(
                SPOT,
                15000.0,
                time,
                RATE,
                below_intrinsic,
                OptionType::Call,
                &config
            ),
            None
        );
    }

    #[test]
    fn test_zero_vega_falls_back() {
        let config = SolverConfig::default();

        // T = 0 makes vega exactly zero on the first Newton iteration; the
        // bisection bracket check then rejects a premium with no root.
        let result =
            implied_volatility(SPOT, 19000.0, 0.0, RATE, 50.0, OptionType::Call, &config);
        assert_eq!(result, None);
    }

    #[test]
    fn test_result_within_bounds() {
        let config = SolverConfig::default();
        let time = 2.0 / 365.0;

        // Tiny premium on a far OTM option: solver may clamp at the floor but
        // must never step outside the configured bounds
        let premium = 0.05;
        if let Some(iv) = implied_volatility(
            SPOT,
            19500.0,
            time,
            RATE,
            premium,
            OptionType::Call,
            &config,
        ) {
            assert!(iv >= config.vol_lo && iv <= config.vol_hi);
        }
    }
}
