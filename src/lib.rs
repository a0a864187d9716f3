//! # volmetrics - Option Chain IV Analytics
//!
//! Implied-volatility analytics for Indian F&O option chains: parse a
//! vendor's positional chain records, recover per-strike implied volatility
//! by inverting Black-Scholes, aggregate an ATM-band representative IV, and
//! rank it against the symbol's history.
//!
//! ## Overview
//!
//! The vendor delivers each strike as an unnamed positional array with OI and
//! volume pre-multiplied by lot size, and quotes premiums the model has to be
//! inverted against. This crate covers the full path from that wire format to
//! the `(IV, percentile)` pair a dashboard displays.
//!
//! ## Key Components
//!
//! - **Record parsing**: positional vendor records → typed [`core::StrikeQuote`]s,
//!   lot-size normalized
//! - **Black-Scholes**: European pricing and vega, the model being inverted
//! - **IV solver**: Newton-Raphson with a bisection fallback for the vega
//!   plateau cases Newton cannot handle
//! - **Chain aggregation**: plausibility-filtered per-strike IVs averaged
//!   inside a configurable ATM band
//! - **Percentile**: strict rank of today's IV against up to 252 trading days
//!   of history
//! - **Expiry calendar**: DD-MM-YYYY parsing, monthly last-Thursday expiry,
//!   probe candidates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use volmetrics::prelude::*;
//! use chrono::Utc;
//!
//! // Decode a vendor chain payload
//! let payload = ChainPayload::from_json(r#"{"Records": []}"#).unwrap();
//! let chain = parse_chain(&payload).unwrap();
//!
//! // Aggregate a representative IV and rank it against history
//! let spot = 18060.0;
//! let tte = time_to_expiry(chain.expiry, Utc::now());
//! let history = vec![15.2, 18.4, 21.0];
//! let metrics = iv_metrics(&chain, spot, tte, &history, &IvConfig::default());
//!
//! println!("IV {:?} pct {:?}", metrics.iv, metrics.percentile);
//! ```
//!
//! ## What This Crate Does
//!
//! - Decodes vendor chain payloads and spot CSV bodies
//! - Prices European options and solves implied volatility
//! - Aggregates chain IV and computes historical percentiles
//! - Degrades to `None` on bad market data instead of raising
//!
//! ## What This Crate Does NOT Do
//!
//! - Talk to the vendor API (transport lives with the caller)
//! - Persist snapshots or historical series (storage lives with the caller)
//! - Price American exercise or dividend-paying underlyings
//! - Model multi-leg strategies

pub mod analytics;
pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        lot_size, OptionChain, OptionType, Series, SideQuote, StrikeQuote, VolError, VolResult,
    };

    // Vendor data decoding
    pub use crate::data::{
        candidate_expiries, format_expiry, next_monthly_expiry, parse_chain, parse_expiry,
        parse_ltp_csv, parse_record, time_to_expiry, ChainPayload,
    };

    // Models
    pub use crate::models::{
        checked_price,
        implied_volatility,
        norm_cdf,
        norm_pdf,

        // Black-Scholes
        price as bs_price,
        vega as bs_vega,
        SolverConfig,
    };

    // Analytics
    pub use crate::analytics::{
        aggregate_chain_iv,
        change_percent,
        iv_metrics,
        iv_percentile,
        ChainIvCalculator,
        DailySnapshot,
        IvCandidate,
        // Config
        IvConfig,
        IvMetrics,
        Signal,
    };
}

// Re-export main types at crate root
pub use crate::analytics::{IvConfig, IvMetrics};
pub use crate::core::{VolError, VolResult};
