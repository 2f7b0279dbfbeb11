//! # tender-currencies
//!
//! ISO 4217 currency metadata and the registry that hands out
//! [`Currency`] values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Currency` value type.
pub mod currency;

/// Registry of active, withdrawn, and user-defined codes.
pub mod registry;

/// ISO 4217 tables by region, plus withdrawn codes.
pub mod currencies;

pub use currency::{Currency, UNKNOWN_MINOR_UNITS};
pub use registry::{validate_code, CurrencyRegistry, CurrencyTypes};
