//! Decimal helpers shared by the currency and money crates.

use rust_decimal::Decimal;

/// Largest scale `rust_decimal` can represent, and the unknown-minor-units
/// sentinel used by currencies.
pub const MAX_SCALE: u32 = 28;

/// `10^exp` as a [`Decimal`]. `exp` is clamped to [`MAX_SCALE`].
#[inline]
pub fn pow10(exp: u32) -> Decimal {
    // 10^28 < 2^96, so every clamped power fits the 96-bit mantissa.
    Decimal::from_i128_with_scale(10_i128.pow(exp.min(MAX_SCALE)), 0)
}

/// `10^-places` as a [`Decimal`]. `places` is clamped to [`MAX_SCALE`].
#[inline]
pub fn epsilon(places: u32) -> Decimal {
    Decimal::new(1, places.min(MAX_SCALE))
}

/// Return `true` if `value` has no fractional part.
#[inline]
pub fn is_integral(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Return `true` if `value` needs no more than `places` fractional digits.
///
/// Trailing zeros are ignored, so `1.2300` fits in two places.
pub fn fits_scale(value: Decimal, places: u32) -> bool {
    value.scale() <= places || value.normalize().scale() <= places
}
