//! Rounding policies.
//!
//! A [`RoundingPolicy`] is either a fixed [`RoundingMode`] or a pluggable
//! [`RoundingAdjuster`]. Policies are stateless strategies: two policies are
//! interchangeable whenever they round every amount the same way.

use std::fmt;
use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tender_core::{ensure, Result, RoundingMode, Settings};

use crate::decimal::MAX_SCALE;

/// Map a [`RoundingMode`] onto the `rust_decimal` strategy implementing it.
pub fn strategy(mode: RoundingMode) -> RoundingStrategy {
    match mode {
        RoundingMode::HalfToEven => RoundingStrategy::MidpointNearestEven,
        RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        RoundingMode::HalfTowardZero => RoundingStrategy::MidpointTowardZero,
        RoundingMode::ToZero => RoundingStrategy::ToZero,
        RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
        RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
        RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
    }
}

/// Round `value` to `decimal_places` using the given convention.
pub fn round(value: Decimal, decimal_places: u32, mode: RoundingMode) -> Decimal {
    value.round_dp_with_strategy(decimal_places.min(MAX_SCALE), strategy(mode))
}

/// A caller-supplied rounding strategy.
pub trait RoundingAdjuster: fmt::Debug + Send + Sync {
    /// Round `amount` to an integer.
    fn round(&self, amount: Decimal) -> Decimal {
        self.round_to(amount, 0)
    }

    /// Round `amount` to at most `decimal_places` fractional digits.
    fn round_to(&self, amount: Decimal, decimal_places: u32) -> Decimal;
}

/// Rounds to the nearest multiple of a fixed increment, e.g. `0.05` for
/// Swiss cash payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementRounding {
    increment: Decimal,
    mode: RoundingMode,
}

impl IncrementRounding {
    /// Create an adjuster for a strictly positive `increment`.
    pub fn new(increment: Decimal, mode: RoundingMode) -> Result<Self> {
        ensure!(
            increment > Decimal::ZERO,
            "rounding increment must be positive, got {increment}"
        );
        Ok(Self { increment, mode })
    }

    /// The increment amounts are snapped to.
    pub fn increment(&self) -> Decimal {
        self.increment
    }
}

impl RoundingAdjuster for IncrementRounding {
    fn round(&self, amount: Decimal) -> Decimal {
        round(amount, 0, self.mode)
    }

    fn round_to(&self, amount: Decimal, decimal_places: u32) -> Decimal {
        let snapped = amount
            .checked_div(self.increment)
            .map(|units| round(units, 0, self.mode))
            .and_then(|units| units.checked_mul(self.increment));
        // Amounts too large to snap fall back to plain rounding.
        round(snapped.unwrap_or(amount), decimal_places, self.mode)
    }
}

/// How an arbitrary-precision amount is brought to a currency's precision.
#[derive(Debug, Clone)]
pub enum RoundingPolicy {
    /// A standard rounding mode.
    Mode(RoundingMode),
    /// A pluggable adjuster.
    Adjuster(Arc<dyn RoundingAdjuster>),
}

impl RoundingPolicy {
    /// Banker's rounding.
    pub const HALF_TO_EVEN: RoundingPolicy = RoundingPolicy::Mode(RoundingMode::HalfToEven);

    /// Schoolbook rounding.
    pub const HALF_AWAY_FROM_ZERO: RoundingPolicy =
        RoundingPolicy::Mode(RoundingMode::HalfAwayFromZero);

    /// Truncation.
    pub const TRUNCATE: RoundingPolicy = RoundingPolicy::Mode(RoundingMode::ToZero);

    /// Wrap an adjuster.
    pub fn adjuster(adjuster: impl RoundingAdjuster + 'static) -> Self {
        RoundingPolicy::Adjuster(Arc::new(adjuster))
    }

    /// Round `amount` to an integer.
    pub fn round(&self, amount: Decimal) -> Decimal {
        match self {
            RoundingPolicy::Mode(mode) => round(amount, 0, *mode),
            RoundingPolicy::Adjuster(adjuster) => adjuster.round(amount),
        }
    }

    /// Round `amount` to `decimal_places`.
    pub fn round_to(&self, amount: Decimal, decimal_places: u32) -> Decimal {
        match self {
            RoundingPolicy::Mode(mode) => round(amount, decimal_places, *mode),
            RoundingPolicy::Adjuster(adjuster) => adjuster.round_to(amount, decimal_places),
        }
    }

    /// The underlying mode, if this is not an adjuster.
    pub fn mode(&self) -> Option<RoundingMode> {
        match self {
            RoundingPolicy::Mode(mode) => Some(*mode),
            RoundingPolicy::Adjuster(_) => None,
        }
    }
}

/// The mode currently configured in [`Settings`].
impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy::Mode(Settings::instance().default_rounding())
    }
}

impl From<RoundingMode> for RoundingPolicy {
    fn from(mode: RoundingMode) -> Self {
        RoundingPolicy::Mode(mode)
    }
}
