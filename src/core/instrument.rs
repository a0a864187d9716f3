//! Instrument reference data
//!
//! Static lot sizes and series codes for the covered F&O universe. The vendor
//! reports open interest and volume pre-multiplied by lot size, so the parser
//! needs the lot size to recover exchange-equivalent figures.

use serde::{Deserialize, Serialize};

/// Default lot size for single-stock F&O contracts
pub const DEFAULT_LOT_SIZE: u32 = 500;

/// Lot size for a symbol.
///
/// Index contracts carry their own lot sizes; everything else falls back to
/// the stock default.
pub fn lot_size(symbol: &str) -> u32 {
    match symbol {
        "NIFTY" => 50,
        "BANKNIFTY" => 15,
        _ => DEFAULT_LOT_SIZE,
    }
}

/// Vendor series code for spot quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Series {
    /// Index series ("XX")
    Index,
    /// Equity series ("EQ")
    Equity,
}

impl Series {
    /// Series for a symbol: indices quote under "XX", stocks under "EQ"
    pub fn for_symbol(symbol: &str) -> Self {
        match symbol {
            "NIFTY" | "BANKNIFTY" => Series::Index,
            _ => Series::Equity,
        }
    }

    /// Wire code the vendor expects in spot-quote requests
    pub fn code(&self) -> &'static str {
        match self {
            Series::Index => "XX",
            Series::Equity => "EQ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_sizes() {
        assert_eq!(lot_size("NIFTY"), 50);
        assert_eq!(lot_size("BANKNIFTY"), 15);
        assert_eq!(lot_size("RELIANCE"), 500);
    }

    #[test]
    fn test_series() {
        assert_eq!(Series::for_symbol("NIFTY").code(), "XX");
        assert_eq!(Series::for_symbol("BANKNIFTY").code(), "XX");
        assert_eq!(Series::for_symbol("TCS").code(), "EQ");
    }
}
