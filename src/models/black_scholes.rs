//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (no dividend yield)
//! - Vega computation
//!
//! Black-Scholes is the only model here: it converts market premiums to
//! implied volatilities and nothing downstream needs more than that.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{OptionType, VolError, VolResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price.
///
/// Expired (T <= 0) or zero-vol inputs collapse to intrinsic value before the
/// d1/d2 formula is touched. The result is floored at zero; near the
/// boundaries the closed form can dip a hair negative in floating point.
///
/// Spot and strike must be positive; that is the caller's contract.
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();

    let price = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    price.max(0.0)
}

/// [`price`] with the positivity contract checked instead of assumed, for
/// callers pricing values they did not validate themselves.
pub fn checked_price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> VolResult<f64> {
    if spot <= 0.0 {
        return Err(VolError::invalid_input("Non-positive spot"));
    }
    if strike <= 0.0 {
        return Err(VolError::invalid_input("Non-positive strike"));
    }
    if time < 0.0 || vol < 0.0 {
        return Err(VolError::invalid_input(
            "Negative time to expiry or volatility",
        ));
    }

    Ok(price(spot, strike, time, rate, vol, option_type))
}

/// Black-Scholes vega: dV/dσ, identical for calls and puts.
///
/// Zero for expired or zero-vol inputs, which is what signals the IV solver
/// to abandon Newton-Raphson.
pub fn vega(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return 0.0;
    }

    let d1 = d1(spot, strike, time, rate, vol);
    spot * norm_pdf(d1) * time.sqrt()
}
