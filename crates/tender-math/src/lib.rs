//! # tender-math
//!
//! Decimal helpers (powers of ten, scale checks) and rounding policies over
//! `rust_decimal::Decimal`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Powers of ten and scale utilities.
pub mod decimal;

/// Rounding conventions, adjusters, and policies.
pub mod rounding;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use decimal::{epsilon, fits_scale, is_integral, pow10, MAX_SCALE};
pub use rounding::{round, IncrementRounding, RoundingAdjuster, RoundingPolicy};
