//! Daily snapshot assembly
//!
//! Day-over-day change, the dashboard signal derived from it, and the
//! per-symbol record the storage layer persists at end of day. Persistence
//! itself lives outside this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::round2;

/// Day-over-day change in percent, 2 decimal places.
///
/// `None` without a usable previous close.
pub fn change_percent(spot: f64, previous_close: f64) -> Option<f64> {
    if previous_close <= 0.0 {
        return None;
    }
    Some(round2((spot - previous_close) / previous_close * 100.0))
}

/// Dashboard signal classified from day-over-day movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    HighVolatility,
    Bullish,
    Bearish,
    Neutral,
}

impl Signal {
    /// Classify a change percent. Large moves in either direction read as
    /// high volatility before direction is considered.
    pub fn classify(change_percent: f64) -> Self {
        if change_percent.abs() > 2.0 {
            Signal::HighVolatility
        } else if change_percent > 1.0 {
            Signal::Bullish
        } else if change_percent < -1.0 {
            Signal::Bearish
        } else {
            Signal::Neutral
        }
    }

    /// Display label used by the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Signal::HighVolatility => "High Volatility",
            Signal::Bullish => "Bullish",
            Signal::Bearish => "Bearish",
            Signal::Neutral => "Neutral",
        }
    }
}

/// End-of-day record for one symbol, handed to the storage layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub symbol: String,
    pub date: NaiveDate,
    pub spot: f64,
    pub volume: Option<u64>,
    /// Chain IV percentage, 2dp
    pub iv: Option<f64>,
    /// Percentile of `iv` against the historical series, 2dp
    pub iv_percentile: Option<f64>,
    pub signal: Option<Signal>,
}

impl DailySnapshot {
    pub fn new(symbol: impl Into<String>, date: NaiveDate, spot: f64) -> Self {
        Self {
            symbol: symbol.into(),
            date,
            spot,
            volume: None,
            iv: None,
            iv_percentile: None,
            signal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent() {
        assert_eq!(change_percent(103.0, 100.0), Some(3.0));
        assert_eq!(change_percent(97.5, 100.0), Some(-2.5));
        assert_eq!(change_percent(100.0, 0.0), None);
        assert_eq!(change_percent(100.0, -5.0), None);
    }

    #[test]
    fn test_signal_boundaries() {
        assert_eq!(Signal::classify(2.5), Signal::HighVolatility);
        assert_eq!(Signal::classify(-2.5), Signal::HighVolatility);
        // Exactly 2.0 is not "large"
        assert_eq!(Signal::classify(2.0), Signal::Bullish);
        assert_eq!(Signal::classify(-2.0), Signal::Bearish);
        assert_eq!(Signal::classify(1.0), Signal::Neutral);
        assert_eq!(Signal::classify(-1.0), Signal::Neutral);
        assert_eq!(Signal::classify(0.3), Signal::Neutral);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut snap = DailySnapshot::new(
            "NIFTY",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            18054.35,
        );
        snap.iv = Some(18.42);
        snap.iv_percentile = Some(61.9);
        snap.signal = Some(Signal::Bullish);

        let json = serde_json::to_string(&snap).unwrap();
        let back: DailySnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.symbol, "NIFTY");
        assert_eq!(back.iv, Some(18.42));
        assert_eq!(back.signal, Some(Signal::Bullish));
    }
}
