//! Configuration for chain IV extraction

use serde::{Deserialize, Serialize};

use crate::models::SolverConfig;

/// Configuration for chain IV aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvConfig {
    /// ATM band as a fraction of spot: strikes with |K - S| / S below this
    /// contribute to the representative IV.
    /// Default: 0.05. Hand-tuned; pending a documented calibration.
    pub atm_band: f64,

    /// Plausibility floor for a per-strike IV (5%). Candidates below are
    /// treated as solver noise near the lower clamp and discarded.
    /// Default: 0.05. Hand-tuned; pending a documented calibration.
    pub iv_floor: f64,

    /// Plausibility cap for a per-strike IV (200%).
    /// Default: 2.0. Hand-tuned; pending a documented calibration.
    pub iv_cap: f64,

    /// Risk-free rate used in pricing. Indian sovereign short rates sit
    /// around 6-7%.
    /// Default: 0.065
    pub risk_free_rate: f64,

    /// Implied volatility solver settings
    pub solver: SolverConfig,
}

impl Default for IvConfig {
    fn default() -> Self {
        Self {
            atm_band: 0.05,
            iv_floor: 0.05,
            iv_cap: 2.0,
            risk_free_rate: 0.065,
            solver: SolverConfig::default(),
        }
    }
}
