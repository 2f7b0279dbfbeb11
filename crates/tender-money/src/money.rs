//! `Money`: an arbitrary-precision amount tied to a currency.
//!
//! A `Money` remembers whether its amount has been normalized, i.e. rounded
//! to the currency's decimal places by some [`RoundingPolicy`]. Operations
//! that cannot introduce extra digits (adding two normalized amounts, adding
//! an integer, negation) keep the flag; everything else clears it, and
//! [`Money::normalize`] or the [`calculator`](crate::calculator) restores it.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use tender_core::{ensure, ensure_state, overflow, Error, Result};
use tender_currencies::Currency;
use tender_math::{is_integral, RoundingPolicy};

use crate::format::{FormatKind, FormatSpec, InvariantFormatter, MoneyFormatter};
use crate::moneypenny::Moneypenny;

/// An amount of money.
///
/// Equality compares amount, currency and the normalization flag, so
/// `10.00 EUR` built by [`Money::of_major`] differs from the same amount
/// built by [`Money::from_major`]. Use [`Money::compare_to`] to compare
/// amounts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    is_normalized: bool,
}

macro_rules! narrowing {
    ($($name:ident -> $ty:ty),* $(,)?) => {$(
        #[doc = concat!("The amount truncated toward zero as `", stringify!($ty), "`.")]
        ///
        /// Fails with [`Error::Overflow`] when the integral part does not fit.
        pub fn $name(&self) -> Result<$ty> {
            match ToPrimitive::$name(&self.amount) {
                Some(value) => Ok(value),
                None => overflow!("{} does not fit in {}", self.amount, stringify!($ty)),
            }
        }
    )*};
}

impl Money {
    pub(crate) fn assemble(amount: Decimal, currency: Currency, normalized: bool) -> Self {
        Self {
            amount,
            currency,
            is_normalized: normalized || !currency.has_fixed_decimal_places(),
        }
    }

    // ── Construction ─────────────────────────────────────────────────────

    /// Zero in `currency`.
    pub fn zero(currency: Currency) -> Self {
        Self::assemble(Decimal::ZERO, currency, true)
    }

    /// Wrap a major-unit amount without rounding it.
    pub fn of_major(amount: Decimal, currency: Currency) -> Self {
        Self::assemble(amount, currency, false)
    }

    /// Wrap a minor-unit amount without rounding it.
    pub fn of_minor(amount: Decimal, currency: Currency) -> Self {
        Self::assemble(amount * currency.epsilon(), currency, false)
    }

    /// Round a major-unit amount with the default policy.
    pub fn from_major(amount: Decimal, currency: Currency) -> Self {
        Self::from_major_with(amount, currency, &RoundingPolicy::default())
    }

    /// Round a major-unit amount to the currency's decimal places.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tender_currencies::Currency;
    /// use tender_math::RoundingPolicy;
    /// use tender_money::Money;
    ///
    /// let eur = Currency::of("EUR").unwrap();
    /// let m = Money::from_major_with(dec!(10.005), eur, &RoundingPolicy::HALF_TO_EVEN);
    /// assert_eq!(m.amount(), dec!(10.00));
    /// assert!(m.is_normalized());
    /// ```
    pub fn from_major_with(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Self {
        let amount = if currency.has_fixed_decimal_places() {
            policy.round_to(amount, currency.decimal_places())
        } else {
            amount
        };
        Self::assemble(amount, currency, true)
    }

    /// Round a minor-unit amount with the default policy.
    pub fn from_minor(amount: Decimal, currency: Currency) -> Self {
        Self::from_minor_with(amount, currency, &RoundingPolicy::default())
    }

    /// Round a minor-unit amount to the currency's decimal places.
    pub fn from_minor_with(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Self {
        Self::from_major_with(amount * currency.epsilon(), currency, policy)
    }

    /// This value if already normalized, otherwise its rounding under `policy`.
    pub fn normalize(&self, policy: &RoundingPolicy) -> Money {
        if self.is_normalized {
            *self
        } else {
            Self::from_major_with(self.amount, self.currency, policy)
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Amount in major units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether the amount is known to be rounded to the currency's places.
    pub fn is_normalized(&self) -> bool {
        self.is_normalized
    }

    /// Whether rounding applies to this currency at all.
    pub fn is_roundable(&self) -> bool {
        self.currency.has_fixed_decimal_places()
    }

    /// Roundable and normalized: safe to convert to [`Moneypenny`].
    pub fn is_rounded(&self) -> bool {
        self.is_roundable() && self.is_normalized
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.amount.cmp(&Decimal::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Sum of two amounts in the same currency; normalized iff both are.
    pub fn plus(&self, other: &Money) -> Result<Money> {
        self.currency.ensure_same(&other.currency)?;
        let sum = checked(self.amount.checked_add(other.amount), "+", self.amount, other.amount)?;
        Ok(Self::assemble(sum, self.currency, self.is_normalized && other.is_normalized))
    }

    /// Difference of two amounts in the same currency; normalized iff both are.
    pub fn minus(&self, other: &Money) -> Result<Money> {
        self.currency.ensure_same(&other.currency)?;
        let diff = checked(self.amount.checked_sub(other.amount), "-", self.amount, other.amount)?;
        Ok(Self::assemble(diff, self.currency, self.is_normalized && other.is_normalized))
    }

    /// Add a whole number of major units, keeping the flag.
    pub fn plus_integer(&self, value: i64) -> Result<Money> {
        let rhs = Decimal::from(value);
        let sum = checked(self.amount.checked_add(rhs), "+", self.amount, rhs)?;
        Ok(Self::assemble(sum, self.currency, self.is_normalized))
    }

    /// Subtract a whole number of major units, keeping the flag.
    pub fn minus_integer(&self, value: i64) -> Result<Money> {
        let rhs = Decimal::from(value);
        let diff = checked(self.amount.checked_sub(rhs), "-", self.amount, rhs)?;
        Ok(Self::assemble(diff, self.currency, self.is_normalized))
    }

    /// Add an arbitrary amount; the result is not normalized.
    pub fn plus_amount(&self, value: Decimal) -> Result<Money> {
        let sum = checked(self.amount.checked_add(value), "+", self.amount, value)?;
        Ok(Self::assemble(sum, self.currency, false))
    }

    /// Subtract an arbitrary amount; the result is not normalized.
    pub fn minus_amount(&self, value: Decimal) -> Result<Money> {
        let diff = checked(self.amount.checked_sub(value), "-", self.amount, value)?;
        Ok(Self::assemble(diff, self.currency, false))
    }

    /// Scale by `factor`; the result is not normalized.
    pub fn multiply_by(&self, factor: Decimal) -> Result<Money> {
        let product = checked(self.amount.checked_mul(factor), "*", self.amount, factor)?;
        Ok(Self::assemble(product, self.currency, false))
    }

    /// Divide by `divisor`; the result is not normalized.
    pub fn divide_by(&self, divisor: Decimal) -> Result<Money> {
        ensure!(!divisor.is_zero(), "division of {self} by zero");
        let quotient = checked(self.amount.checked_div(divisor), "/", self.amount, divisor)?;
        Ok(Self::assemble(quotient, self.currency, false))
    }

    /// Remainder of truncating division by `divisor`; not normalized.
    pub fn rem(&self, divisor: Decimal) -> Result<Money> {
        ensure!(!divisor.is_zero(), "remainder of {self} by zero");
        let remainder = checked(self.amount.checked_rem(divisor), "%", self.amount, divisor)?;
        Ok(Self::assemble(remainder, self.currency, false))
    }

    /// Same amount with the opposite sign.
    pub fn negate(&self) -> Money {
        Self::assemble(-self.amount, self.currency, self.is_normalized)
    }

    /// Absolute value.
    pub fn abs(&self) -> Money {
        Self::assemble(self.amount.abs(), self.currency, self.is_normalized)
    }

    /// Add one major unit.
    pub fn increment(&self) -> Result<Money> {
        self.plus_integer(1)
    }

    /// Subtract one major unit.
    pub fn decrement(&self) -> Result<Money> {
        self.minus_integer(1)
    }

    /// Order by amount; both values must share a currency.
    pub fn compare_to(&self, other: &Money) -> Result<Ordering> {
        self.currency.ensure_same(&other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    // ── Conversions ──────────────────────────────────────────────────────

    /// Amount in minor units, `amount * 10^decimal_places`.
    pub fn to_minor(&self) -> Result<Decimal> {
        let factor = self.currency.factor();
        checked(self.amount.checked_mul(factor), "*", self.amount, factor)
    }

    /// Amount in minor units as an `i64`.
    ///
    /// Fails with [`Error::InvalidState`] unless normalized and with
    /// [`Error::Overflow`] when out of range.
    pub fn to_long_minor(&self) -> Result<i64> {
        ensure_state!(self.is_normalized, "{self} is not normalized");
        let minor = self.to_minor()?;
        match minor.to_i64() {
            Some(value) => Ok(value),
            None => overflow!("{minor} minor units of {} do not fit in i64", self.currency),
        }
    }

    /// Convert to a [`Moneypenny`].
    ///
    /// Fails with [`Error::InvalidState`] unless [`is_rounded`](Self::is_rounded)
    /// and with [`Error::Overflow`] when the minor units do not fit in `i64`.
    pub fn to_penny(&self) -> Result<Moneypenny> {
        ensure_state!(self.is_rounded(), "{self} is not rounded");
        let minor = self.to_minor()?;
        ensure_state!(
            is_integral(minor),
            "{self} is not a whole number of minor units"
        );
        match minor.to_i64() {
            Some(value) => Moneypenny::new(value, self.currency),
            None => overflow!("{minor} minor units of {} do not fit in i64", self.currency),
        }
    }

    /// Like [`to_penny`](Self::to_penny) but returns `None` instead of failing.
    pub fn try_to_penny(&self) -> Option<Moneypenny> {
        self.to_penny().ok()
    }

    narrowing!(to_i8 -> i8, to_i16 -> i16, to_i32 -> i32, to_i64 -> i64);

    /// Nearest `f64`. Lossy.
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(f64::NAN)
    }

    // ── Formatting ───────────────────────────────────────────────────────

    /// Format with the invariant formatter.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tender_currencies::Currency;
    /// use tender_money::Money;
    ///
    /// let eur = Currency::of("EUR").unwrap();
    /// let m = Money::of_major(dec!(1234.5), eur);
    /// assert_eq!(m.to_string_with("N").unwrap(), "1,234.50 EUR");
    /// assert_eq!(m.to_string_with("F0").unwrap(), "1235 EUR");
    /// ```
    pub fn to_string_with(&self, format: &str) -> Result<String> {
        self.format_with(format, &InvariantFormatter)
    }

    /// Format with a caller-supplied formatter.
    pub fn format_with(&self, format: &str, formatter: &dyn MoneyFormatter) -> Result<String> {
        let spec = FormatSpec::parse(format)?;
        Ok(self.render(spec, formatter))
    }

    fn render(&self, spec: FormatSpec, formatter: &dyn MoneyFormatter) -> String {
        let places = self.currency.decimal_places();
        let default_places = match spec.kind {
            _ if !self.is_roundable() => None,
            // General shows the stored amount; pad only when that is exact.
            FormatKind::General if !self.is_normalized => None,
            _ => Some(places),
        };
        formatter.format_money(&spec.or_places(default_places), self.amount, self.currency.code())
    }
}

fn checked(result: Option<Decimal>, op: &str, lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    result.ok_or_else(|| Error::Overflow(format!("{lhs} {op} {rhs}")))
}

impl Add for Money {
    type Output = Result<Money>;

    fn add(self, rhs: Money) -> Result<Money> {
        self.plus(&rhs)
    }
}

impl Sub for Money {
    type Output = Result<Money>;

    fn sub(self, rhs: Money) -> Result<Money> {
        self.minus(&rhs)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

impl From<Moneypenny> for Money {
    fn from(penny: Moneypenny) -> Money {
        penny.to_money()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(FormatSpec::default(), &InvariantFormatter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tender_core::RoundingMode;

    fn eur() -> Currency {
        Currency::of("EUR").unwrap()
    }

    fn usd() -> Currency {
        Currency::of("USD").unwrap()
    }

    #[test]
    fn of_major_is_raw() {
        let m = Money::of_major(dec!(10.005), eur());
        assert_eq!(m.amount(), dec!(10.005));
        assert!(!m.is_normalized());
        assert!(!m.is_rounded());
    }

    #[test]
    fn from_major_rounds_half_to_even() {
        let m = Money::from_major_with(dec!(10.005), eur(), &RoundingPolicy::HALF_TO_EVEN);
        assert_eq!(m.amount(), dec!(10.00));
        assert!(m.is_normalized());
        let m = Money::from_major_with(dec!(10.015), eur(), &RoundingPolicy::HALF_TO_EVEN);
        assert_eq!(m.amount(), dec!(10.02));
    }

    #[test]
    fn minor_units_scale_by_epsilon() {
        let m = Money::from_minor_with(dec!(1234), eur(), &RoundingPolicy::TRUNCATE);
        assert_eq!(m.amount(), dec!(12.34));
        let jpy = Currency::of("JPY").unwrap();
        assert_eq!(Money::of_minor(dec!(1234), jpy).amount(), dec!(1234));
    }

    #[test]
    fn unroundable_currency_is_always_normalized() {
        let dem = Currency::try_create_with("DEM", tender_currencies::CurrencyTypes::WITHDRAWN)
            .unwrap();
        let m = Money::of_major(dec!(1.23456789), dem);
        assert!(m.is_normalized());
        assert!(!m.is_rounded());
        assert_eq!(m.multiply_by(dec!(3)).unwrap().amount(), dec!(3.70370367));
        assert!(m.multiply_by(dec!(3)).unwrap().is_normalized());
    }

    #[test]
    fn normalize_applies_policy_once() {
        let raw = Money::of_major(dec!(2.675), eur());
        let up = raw.normalize(&RoundingPolicy::HALF_AWAY_FROM_ZERO);
        assert_eq!(up.amount(), dec!(2.68));
        assert_eq!(up.normalize(&RoundingPolicy::TRUNCATE), up);
    }

    #[test]
    fn flag_propagation() {
        let a = Money::from_major(dec!(1.25), eur());
        let b = Money::from_major(dec!(2.50), eur());
        let raw = Money::of_major(dec!(0.001), eur());

        assert!(a.plus(&b).unwrap().is_normalized());
        assert!(!a.plus(&raw).unwrap().is_normalized());
        assert!(a.plus_integer(3).unwrap().is_normalized());
        assert!(!a.plus_amount(dec!(1)).unwrap().is_normalized());
        assert!(!a.multiply_by(dec!(2)).unwrap().is_normalized());
        assert!(a.negate().is_normalized());
        assert!(raw.abs().amount() > Decimal::ZERO);
        assert_eq!(a.increment().unwrap().amount(), dec!(2.25));
        assert_eq!(a.decrement().unwrap().amount(), dec!(0.25));
    }

    #[test]
    fn mismatched_currencies_fail() {
        let a = Money::from_major(dec!(1), eur());
        let b = Money::from_major(dec!(1), usd());
        let expected = Error::mismatch("EUR", "USD");
        assert_eq!(a.plus(&b), Err(expected.clone()));
        assert_eq!(a - b, Err(expected.clone()));
        assert_eq!(a.compare_to(&b), Err(expected));
    }

    #[test]
    fn division_by_zero_is_invalid() {
        let a = Money::from_major(dec!(1), eur());
        assert!(matches!(a.divide_by(Decimal::ZERO), Err(Error::InvalidArgument(_))));
        assert!(matches!(a.rem(Decimal::ZERO), Err(Error::InvalidArgument(_))));
        assert_eq!(a.rem(dec!(0.3)).unwrap().amount(), dec!(0.1));
    }

    #[test]
    fn overflow_is_reported() {
        let big = Money::of_major(Decimal::MAX, eur());
        assert!(big.plus_integer(1).unwrap_err().is_overflow());
        assert!(big.multiply_by(dec!(2)).unwrap_err().is_overflow());
        assert!(big.to_minor().unwrap_err().is_overflow());
    }

    #[test]
    fn equality_includes_flag() {
        let raw = Money::of_major(dec!(10.00), eur());
        let rounded = Money::from_major(dec!(10.00), eur());
        assert_ne!(raw, rounded);
        assert_eq!(raw.compare_to(&rounded).unwrap(), Ordering::Equal);
    }

    #[test]
    fn conversions() {
        let m = Money::from_major_with(dec!(-12.34), eur(), &RoundingPolicy::from(RoundingMode::Floor));
        assert_eq!(m.to_minor().unwrap(), dec!(-1234));
        assert_eq!(m.to_long_minor().unwrap(), -1234);
        assert_eq!(m.to_i8().unwrap(), -12);
        assert_eq!(m.to_penny().unwrap().amount(), -1234);

        let raw = Money::of_major(dec!(300.5), eur());
        assert!(matches!(raw.to_long_minor(), Err(Error::InvalidState(_))));
        assert!(raw.try_to_penny().is_none());
        assert!(raw.to_i8().unwrap_err().is_overflow());
        assert_eq!(raw.to_i16().unwrap(), 300);
    }

    #[test]
    fn display_and_formats() {
        assert_eq!(Money::from_major(dec!(10), eur()).to_string(), "10.00 EUR");
        assert_eq!(Money::of_major(dec!(10.125), eur()).to_string(), "10.125 EUR");
        let m = Money::of_major(dec!(-9876.545), eur());
        assert_eq!(m.to_string_with("F").unwrap(), "-9876.55 EUR");
        assert_eq!(m.to_string_with("n1").unwrap(), "-9,876.5 EUR");
        assert!(m.to_string_with("Q").is_err());
    }
}
