//! # tender
//!
//! Currency-aware monetary values: ISO 4217 currencies with their
//! precision rules, arbitrary-precision and minor-unit amounts, and
//! rounding-aware aggregation.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `tender-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! tender = "0.1"
//! ```
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tender::prelude::*;
//!
//! let eur = Currency::of("EUR")?;
//! let price = Money::from_major(dec!(19.99), eur);
//! let total = calculator::multiply(&price, dec!(3), &RoundingPolicy::HALF_TO_EVEN)?;
//! assert_eq!(total.to_string(), "59.97 EUR");
//!
//! let usd = Money::from_major(dec!(1), Currency::of("USD")?);
//! assert!(matches!(total.plus(&usd), Err(Error::CurrencyMismatch { .. })));
//! # Ok::<(), tender::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, rounding modes, and global settings.
pub use tender_core as core;

/// Decimal helpers and rounding policies.
pub use tender_math as math;

/// ISO 4217 currencies and the currency registry.
pub use tender_currencies as currencies;

/// `Money`, `Moneypenny`, and the calculator.
pub use tender_money as money;

/// The decimal type every amount is expressed in.
pub use rust_decimal as decimal;

/// The items most programs need.
pub mod prelude {
    pub use rust_decimal::Decimal;
    pub use tender_core::{Error, Result, RoundingMode, Settings};
    pub use tender_currencies::{Currency, CurrencyRegistry, CurrencyTypes};
    pub use tender_math::{IncrementRounding, RoundingAdjuster, RoundingPolicy};
    pub use tender_money::{calculator, Money, Moneypenny};
}
