//! Vendor option-chain record parser
//!
//! The vendor ships each strike row as a positional JSON array with no field
//! names. This module is the only place those raw indices appear; everything
//! downstream works with named fields on [`StrikeQuote`].
//!
//! Wire layout (21+ fields per record):
//!
//! | Index | Field                        |
//! |-------|------------------------------|
//! | 0     | Symbol                       |
//! | 1     | Expiry date (DD-MM-YYYY)     |
//! | 2     | Call timestamp               |
//! | 3     | Call OI (lot-multiplied)     |
//! | 4     | Call LTP                     |
//! | 5     | Call bid                     |
//! | 6     | Call bid qty                 |
//! | 7     | Call ask                     |
//! | 8     | Call ask qty                 |
//! | 9     | Call volume (lot-multiplied) |
//! | 10    | Call volume alternate slot   |
//! | 11    | Strike price                 |
//! | 12    | Put bid                      |
//! | 13    | Put bid qty                  |
//! | 14    | Put ask                      |
//! | 15    | Put ask qty                  |
//! | 16    | Put OI (lot-multiplied)      |
//! | 17    | Put prev OI                  |
//! | 18    | Put LTP                      |
//! | 19    | Put volume (lot-multiplied)  |
//! | 20    | Put timestamp                |
//!
//! OI and volume arrive pre-multiplied by lot size and are divided back down
//! to exchange-equivalent values here.

use serde_json::Value;

use crate::core::{lot_size, SideQuote, StrikeQuote};

/// Minimum field count for a well-formed record
pub const MIN_RECORD_FIELDS: usize = 21;

/// Numeric field at a positional index.
///
/// The vendor emits numbers as JSON numbers; anything else (string, null,
/// missing slot) reads as absent.
fn num(record: &[Value], idx: usize) -> Option<f64> {
    record.get(idx).and_then(Value::as_f64)
}

/// Parse one positional record into a strike quote.
///
/// Returns `None` for records that are too short or carry a missing or
/// non-numeric strike. Callers skip such records and keep going; one bad row
/// never poisons the chain.
pub fn parse_record(record: &[Value], symbol: &str) -> Option<StrikeQuote> {
    if record.len() < MIN_RECORD_FIELDS {
        return None;
    }

    let strike = num(record, 11)?;
    if strike <= 0.0 {
        return None;
    }

    let lot = lot_size(symbol) as f64;
    let normalize = |raw: Option<f64>| raw.and_then(|v| if lot > 0.0 { Some(v / lot) } else { None });

    let call = SideQuote {
        oi: normalize(num(record, 3)),
        ltp: num(record, 4),
        bid: num(record, 5),
        bid_qty: num(record, 6),
        ask: num(record, 7),
        ask_qty: num(record, 8),
        // Volume slot varies by feed version; 9 preferred, 10 fallback
        volume: normalize(num(record, 9).or_else(|| num(record, 10))),
    };

    let put = SideQuote {
        bid: num(record, 12),
        bid_qty: num(record, 13),
        ask: num(record, 14),
        ask_qty: num(record, 15),
        oi: normalize(num(record, 16)),
        ltp: num(record, 18),
        volume: normalize(num(record, 19)),
    };

    Some(StrikeQuote { strike, call, put })
}
