//! Option chain quote data
//!
//! Typed snapshot of a single-expiry option chain: one row per strike with a
//! call side and a put side. Rows keep the order the vendor sent them in; the
//! vendor does not guarantee strike ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::option::OptionType;

/// One side (call or put) of a strike row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideQuote {
    /// Last traded price
    pub ltp: Option<f64>,
    /// Bid price
    pub bid: Option<f64>,
    /// Bid quantity
    pub bid_qty: Option<f64>,
    /// Ask price
    pub ask: Option<f64>,
    /// Ask quantity
    pub ask_qty: Option<f64>,
    /// Open interest, lot-size normalized
    pub oi: Option<f64>,
    /// Volume, lot-size normalized
    pub volume: Option<f64>,
}

impl SideQuote {
    /// Mid price from bid/ask
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(b), Some(a)) => Some((b + a) / 2.0),
            _ => None,
        }
    }

    /// Last traded price if present and positive
    pub fn traded_price(&self) -> Option<f64> {
        self.ltp.filter(|p| *p > 0.0)
    }
}

/// Quote row for a single strike (call and put sides)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrikeQuote {
    /// Strike price, always positive
    pub strike: f64,
    pub call: SideQuote,
    pub put: SideQuote,
}

impl StrikeQuote {
    pub fn new(strike: f64) -> Self {
        Self {
            strike,
            call: SideQuote::default(),
            put: SideQuote::default(),
        }
    }

    /// Side accessor by option type
    pub fn side(&self, option_type: OptionType) -> &SideQuote {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    /// Absolute distance from spot
    pub fn distance_from(&self, spot: f64) -> f64 {
        (self.strike - spot).abs()
    }

    /// Is the strike within `band` (fraction of spot) of spot?
    pub fn within_band(&self, spot: f64, band: f64) -> bool {
        self.distance_from(spot) / spot < band
    }
}

/// Single-expiry option chain snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChain {
    /// Underlying symbol
    pub underlying: String,
    /// Expiry date
    pub expiry: NaiveDate,
    /// Strike rows, in vendor order
    pub quotes: Vec<StrikeQuote>,
}

impl OptionChain {
    pub fn new(underlying: impl Into<String>, expiry: NaiveDate) -> Self {
        Self {
            underlying: underlying.into(),
            expiry,
            quotes: Vec::new(),
        }
    }

    /// All strikes, sorted ascending
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self.quotes.iter().map(|q| q.strike).collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        strikes.dedup();
        strikes
    }

    /// ATM strike (closest to spot)
    pub fn atm_strike(&self, spot: f64) -> Option<f64> {
        self.quotes
            .iter()
            .min_by(|a, b| {
                a.distance_from(spot)
                    .partial_cmp(&b.distance_from(spot))
                    .unwrap()
            })
            .map(|q| q.strike)
    }

    /// Quote row at a strike
    pub fn quote_at(&self, strike: f64) -> Option<&StrikeQuote> {
        self.quotes.iter().find(|q| (q.strike - strike).abs() < 0.01)
    }
}
