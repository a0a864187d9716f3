//! volmetrics CLI
//!
//! Command-line walkthrough of the chain IV pipeline on a synthetic payload.

use chrono::Utc;
use serde_json::json;
use volmetrics::prelude::*;

fn main() {
    println!("volmetrics - Option Chain IV Analytics");
    println!("======================================\n");

    // Example: Black-Scholes pricing
    let spot = 18060.0;
    let strike = 18050.0; // ATM
    let time = 30.0 / 365.25; // 30 days
    let rate = 0.065;
    let vol = 0.22;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: {:.2}", spot);
    println!("  Strike: {:.2}", strike);
    println!("  Time: {:.0} days", time * 365.25);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call_price = bs_price(spot, strike, time, rate, vol, OptionType::Call);
    let put_price = bs_price(spot, strike, time, rate, vol, OptionType::Put);

    println!("Option Premiums:");
    println!("  Call: {:.2}", call_price);
    println!("  Put: {:.2}", put_price);
    println!("  Vega: {:.2}", bs_vega(spot, strike, time, rate, vol));

    // Test IV solver
    println!("\nImplied Volatility Solver:");
    match implied_volatility(
        spot,
        strike,
        time,
        rate,
        call_price,
        OptionType::Call,
        &SolverConfig::default(),
    ) {
        Some(iv) => println!(
            "  Recovered IV: {:.2}% (expected: {:.2}%)",
            iv * 100.0,
            vol * 100.0
        ),
        None => println!("  IV solve failed"),
    }

    // Full pipeline on a synthetic vendor payload
    println!("\n--- Chain Pipeline ---");

    let expiry = format_expiry(next_monthly_expiry(Utc::now().date_naive()));
    let record = |k: f64, v: f64| {
        let call_ltp = bs_price(spot, k, time, rate, v, OptionType::Call);
        let put_ltp = bs_price(spot, k, time, rate, v, OptionType::Put);
        json!([
            "NIFTY", expiry, "ts",
            125000.0, call_ltp, null, null, null, null, 98000.0, null,
            k,
            null, null, null, null, 87500.0, null, put_ltp, 45000.0, "ts"
        ])
    };

    let payload = ChainPayload {
        records: vec![
            record(18000.0, 0.21),
            record(18050.0, 0.22),
            record(18100.0, 0.23),
        ],
        vendor_iv: None,
    };

    let chain = parse_chain(&payload).expect("synthetic payload parses");
    println!(
        "Parsed chain: {} strikes, expiry {}",
        chain.quotes.len(),
        chain.expiry
    );

    let tte = time_to_expiry(chain.expiry, Utc::now());
    let history = vec![15.2, 17.8, 19.5, 21.4, 24.0, 26.1];
    let metrics = iv_metrics(&chain, spot, tte, &history, &IvConfig::default());

    match metrics.iv {
        Some(iv) => println!("Chain IV: {:.2}%", iv),
        None => println!("Chain IV: unavailable"),
    }
    match metrics.percentile {
        Some(pct) => println!("IV percentile: {:.2}", pct),
        None => println!("IV percentile: unavailable"),
    }

    println!("\n--- Done ---");
}
