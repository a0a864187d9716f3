//! Option side definitions
//!
//! The chain analytics only need the payoff direction of a leg; contract
//! bookkeeping (exercise style, multipliers, exchange symbols) stays with the
//! trading layer that owns it.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(18100.0, 18000.0), 100.0);
        assert_eq!(OptionType::Put.intrinsic(17900.0, 18000.0), 100.0);
        assert_eq!(OptionType::Call.intrinsic(17900.0, 18000.0), 0.0);
    }
}
