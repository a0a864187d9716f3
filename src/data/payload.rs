//! Vendor payload decoding
//!
//! The chain endpoint returns a JSON envelope of positional records; the spot
//! endpoint returns a two-line CSV. Both are decoded here so the fetch layer
//! stays transport-only.

use serde::Deserialize;
use serde_json::Value;

use crate::core::{OptionChain, VolError, VolResult};
use crate::data::expiry::parse_expiry;
use crate::data::record::parse_record;

/// Option-chain response envelope.
///
/// Records stay as raw JSON values until [`parse_chain`] walks them; a row
/// that is not even an array is skipped like any other malformed record.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainPayload {
    #[serde(rename = "Records", default)]
    pub records: Vec<Value>,

    /// Some feed versions attach a chain-level IV directly; when present it
    /// short-circuits the per-strike computation.
    #[serde(rename = "IV", alias = "impliedVolatility", alias = "iv", default)]
    pub vendor_iv: Option<f64>,
}

impl ChainPayload {
    /// Deserialize the raw response body
    pub fn from_json(body: &str) -> VolResult<Self> {
        serde_json::from_str(body).map_err(|e| VolError::Serialization(e.to_string()))
    }
}

/// Parse every record in the payload into a typed chain.
///
/// The symbol and expiry come from the first record (fields 0 and 1).
/// Malformed records are skipped with a debug note; the chain that comes back
/// holds whatever parsed cleanly.
pub fn parse_chain(payload: &ChainPayload) -> VolResult<OptionChain> {
    let first = payload
        .records
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| VolError::data("Option chain payload has no records"))?;

    let symbol = first
        .first()
        .and_then(Value::as_str)
        .unwrap_or("NIFTY")
        .to_string();

    let expiry_text = first
        .get(1)
        .and_then(Value::as_str)
        .ok_or_else(|| VolError::data("First record carries no expiry date"))?;
    let expiry = parse_expiry(expiry_text)
        .ok_or_else(|| VolError::data(format!("Unparseable expiry date: {}", expiry_text)))?;

    let mut chain = OptionChain::new(symbol.clone(), expiry);

    for (i, record) in payload.records.iter().enumerate() {
        let Some(fields) = record.as_array() else {
            tracing::debug!("Skipping non-array record {} for {}", i, symbol);
            continue;
        };

        match parse_record(fields, &symbol) {
            Some(quote) => chain.quotes.push(quote),
            None => tracing::debug!("Skipping malformed record {} for {}", i, symbol),
        }
    }

    Ok(chain)
}

/// Decode the spot endpoint's CSV body, format `"LTP\n<value>"`
pub fn parse_ltp_csv(body: &str) -> Option<f64> {
    let mut lines = body.trim().lines();
    lines.next()?; // header
    lines.next()?.trim().parse().ok()
}
