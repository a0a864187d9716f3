//! Vendor data decoding
//!
//! Handles:
//! - Positional option-chain records (the vendor's unnamed-field wire format)
//! - Response envelopes (chain JSON, spot CSV)
//! - Expiry calendar (DD-MM-YYYY dates, monthly expiry, probe candidates)
//!
//! Transport lives outside this crate; everything here is a pure decode.

pub mod expiry;
pub mod payload;
pub mod record;

pub use expiry::*;
pub use payload::*;
pub use record::*;
