//! Chain IV aggregation
//!
//! Turns a parsed option chain into one representative IV figure: solve IV
//! per strike from whichever legs traded, keep the plausible ones, and
//! average those inside the ATM band. Strikes whose solve fails simply drop
//! out; the chain's remaining liquidity decides the answer.

use chrono::{DateTime, Utc};

use crate::core::{OptionChain, OptionType};
use crate::data::{parse_chain, time_to_expiry, ChainPayload};
use crate::models::implied_volatility;

use super::{round2, IvConfig};

/// Per-strike IV candidate produced during a chain scan
#[derive(Debug, Clone)]
pub struct IvCandidate {
    /// Strike the premium came from
    pub strike: f64,
    /// Absolute distance from spot
    pub distance: f64,
    /// Solved implied volatility (decimal, e.g. 0.22)
    pub iv: f64,
    /// Which leg supplied the premium
    pub side: OptionType,
}

/// Chain IV calculator with configurable thresholds
pub struct ChainIvCalculator {
    config: IvConfig,
}

impl ChainIvCalculator {
    /// Create a calculator with default configuration
    pub fn new() -> Self {
        Self {
            config: IvConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: IvConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &IvConfig {
        &self.config
    }

    /// Scan every strike and solve IV from each traded leg.
    ///
    /// Candidates outside the plausible range are discarded; what remains is
    /// sorted by distance from spot, closest first. The sort is stable, so
    /// equidistant strikes keep their scan order.
    pub fn scan_candidates(
        &self,
        chain: &OptionChain,
        spot: f64,
        years_to_expiry: f64,
    ) -> Vec<IvCandidate> {
        let mut candidates = Vec::new();

        for quote in &chain.quotes {
            for side in [OptionType::Call, OptionType::Put] {
                let Some(premium) = quote.side(side).traded_price() else {
                    continue;
                };

                let Some(iv) = implied_volatility(
                    spot,
                    quote.strike,
                    years_to_expiry,
                    self.config.risk_free_rate,
                    premium,
                    side,
                    &self.config.solver,
                ) else {
                    continue;
                };

                if iv < self.config.iv_floor || iv > self.config.iv_cap {
                    tracing::debug!(
                        "Discarding implausible IV {:.4} at strike {} ({:?})",
                        iv,
                        quote.strike,
                        side
                    );
                    continue;
                }

                candidates.push(IvCandidate {
                    strike: quote.strike,
                    distance: quote.distance_from(spot),
                    iv,
                    side,
                });
            }
        }

        candidates.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
        candidates
    }

    /// Representative chain IV as a percentage, 2 decimal places.
    ///
    /// Averages all candidates within the ATM band; with none in band, falls
    /// back to the single closest candidate. `None` when no strike yields a
    /// usable IV at all.
    pub fn chain_iv(&self, chain: &OptionChain, spot: f64, years_to_expiry: f64) -> Option<f64> {
        let candidates = self.scan_candidates(chain, spot, years_to_expiry);

        if candidates.is_empty() {
            tracing::warn!(
                "No usable IV candidates in {} chain ({} strikes)",
                chain.underlying,
                chain.quotes.len()
            );
            return None;
        }

        let in_band: Vec<f64> = candidates
            .iter()
            .filter(|c| c.distance / spot < self.config.atm_band)
            .map(|c| c.iv)
            .collect();

        let iv = if in_band.is_empty() {
            candidates[0].iv
        } else {
            in_band.iter().sum::<f64>() / in_band.len() as f64
        };

        Some(round2(iv * 100.0))
    }

    /// Chain IV straight from a vendor payload.
    ///
    /// A chain-level IV attached by the feed wins over the per-strike
    /// computation. Payloads that fail to parse yield `None`.
    pub fn payload_iv(
        &self,
        payload: &ChainPayload,
        spot: f64,
        now: DateTime<Utc>,
    ) -> Option<f64> {
        if let Some(iv) = payload.vendor_iv {
            return Some(iv);
        }

        let chain = parse_chain(payload)
            .map_err(|e| tracing::warn!("Unusable option chain payload: {}", e))
            .ok()?;

        self.chain_iv(&chain, spot, time_to_expiry(chain.expiry, now))
    }
}

impl Default for ChainIvCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function with default configuration
pub fn aggregate_chain_iv(chain: &OptionChain, spot: f64, years_to_expiry: f64) -> Option<f64> {
    ChainIvCalculator::new().chain_iv(chain, spot, years_to_expiry)
}
