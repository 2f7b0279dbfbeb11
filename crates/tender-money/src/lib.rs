//! # tender-money
//!
//! Monetary values and the arithmetic on them:
//!
//! * [`Money`]: an arbitrary-precision `Decimal` amount that tracks whether
//!   it has been rounded to its currency's precision.
//! * [`Moneypenny`]: an exact `i64` count of minor units with checked
//!   arithmetic.
//! * [`calculator`]: rounding-aware arithmetic, sums and averages.
//! * [`format`]: the format mini-language and the formatter hook.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rounding-aware arithmetic and aggregation.
pub mod calculator;

/// Format specifiers and formatters.
pub mod format;

/// The arbitrary-precision money value.
pub mod money;

/// The fixed-precision minor-unit value.
pub mod moneypenny;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use format::{FormatKind, FormatSpec, InvariantFormatter, MoneyFormatter};
pub use money::Money;
pub use moneypenny::Moneypenny;
