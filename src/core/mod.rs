//! Core data types for volmetrics
//!
//! Defines fundamental types:
//! - OptionType: call/put with intrinsic value
//! - SideQuote / StrikeQuote / OptionChain: typed chain snapshot
//! - Instrument reference data: lot sizes, series codes
//! - VolError: crate error type

pub mod error;
pub mod instrument;
pub mod option;
pub mod quote;

pub use error::*;
pub use instrument::*;
pub use option::*;
pub use quote::*;
