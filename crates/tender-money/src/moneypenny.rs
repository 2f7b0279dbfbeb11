//! `Moneypenny`: a whole number of minor units in a fixed-precision currency.

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use tender_core::{ensure, overflow, Error, Result};
use tender_currencies::Currency;
use tender_math::RoundingPolicy;

use crate::format::{FormatSpec, InvariantFormatter, MoneyFormatter};
use crate::money::Money;

/// An `i64` count of minor units (cents for `EUR`, yen for `JPY`).
///
/// Every arithmetic operation is checked and fails with
/// [`Error::Overflow`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Moneypenny {
    amount: i64,
    currency: Currency,
}

impl Moneypenny {
    /// Fails with [`Error::InvalidArgument`] if `currency` has no fixed
    /// number of decimal places.
    pub fn new(amount: i64, currency: Currency) -> Result<Self> {
        ensure_fixed(currency)?;
        Ok(Self { amount, currency })
    }

    /// Zero in `currency`.
    pub fn zero(currency: Currency) -> Result<Self> {
        Self::new(0, currency)
    }

    /// Round a fractional minor-unit amount to a whole number.
    pub fn from_minor(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Result<Self> {
        ensure_fixed(currency)?;
        let rounded = policy.round(amount);
        match rounded.to_i64() {
            Some(minor) => Ok(Self {
                amount: minor,
                currency,
            }),
            None => overflow!("{rounded} minor units of {currency} do not fit in i64"),
        }
    }

    /// Like [`from_minor`](Self::from_minor) but returns `None` instead of failing.
    pub fn try_from_minor(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Option<Self> {
        Self::from_minor(amount, currency, policy).ok()
    }

    /// Scale a major-unit amount to minor units, then round.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tender_currencies::Currency;
    /// use tender_math::RoundingPolicy;
    /// use tender_money::Moneypenny;
    ///
    /// let eur = Currency::of("EUR").unwrap();
    /// let p = Moneypenny::from_major(dec!(12.345), eur, &RoundingPolicy::HALF_TO_EVEN).unwrap();
    /// assert_eq!(p.amount(), 1234);
    /// ```
    pub fn from_major(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Result<Self> {
        ensure_fixed(currency)?;
        let factor = currency.factor();
        match amount.checked_mul(factor) {
            Some(minor) => Self::from_minor(minor, currency, policy),
            None => overflow!("{amount} * {factor}"),
        }
    }

    /// Like [`from_major`](Self::from_major) but returns `None` instead of failing.
    pub fn try_from_major(amount: Decimal, currency: Currency, policy: &RoundingPolicy) -> Option<Self> {
        Self::from_major(amount, currency, policy).ok()
    }

    /// Round `money` to minor units under `policy`.
    pub fn from_money(money: &Money, policy: &RoundingPolicy) -> Result<Self> {
        Self::from_major(money.amount(), money.currency(), policy)
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i64 {
        self.amount.signum()
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Sum of two amounts in the same currency.
    pub fn plus(&self, other: &Moneypenny) -> Result<Moneypenny> {
        self.currency.ensure_same(&other.currency)?;
        self.plus_integer(other.amount)
    }

    /// Difference of two amounts in the same currency.
    pub fn minus(&self, other: &Moneypenny) -> Result<Moneypenny> {
        self.currency.ensure_same(&other.currency)?;
        self.minus_integer(other.amount)
    }

    /// Add `value` minor units.
    pub fn plus_integer(&self, value: i64) -> Result<Moneypenny> {
        self.checked(self.amount.checked_add(value), "+", value)
    }

    /// Subtract `value` minor units.
    pub fn minus_integer(&self, value: i64) -> Result<Moneypenny> {
        self.checked(self.amount.checked_sub(value), "-", value)
    }

    /// Multiply by an integer factor.
    pub fn multiply_by(&self, factor: i64) -> Result<Moneypenny> {
        self.checked(self.amount.checked_mul(factor), "*", factor)
    }

    /// Truncating division.
    pub fn divide_by(&self, divisor: i64) -> Result<Moneypenny> {
        ensure!(divisor != 0, "division of {self} by zero");
        self.checked(self.amount.checked_div(divisor), "/", divisor)
    }

    /// Remainder of truncating division; takes the sign of the dividend.
    pub fn rem(&self, divisor: i64) -> Result<Moneypenny> {
        ensure!(divisor != 0, "remainder of {self} by zero");
        self.checked(self.amount.checked_rem(divisor), "%", divisor)
    }

    /// Quotient and remainder with `quotient * divisor + remainder == self`.
    pub fn div_rem(&self, divisor: i64) -> Result<(Moneypenny, Moneypenny)> {
        Ok((self.divide_by(divisor)?, self.rem(divisor)?))
    }

    /// Same amount with the opposite sign; fails for `i64::MIN`.
    pub fn negate(&self) -> Result<Moneypenny> {
        match self.amount.checked_neg() {
            Some(amount) => Ok(self.with_amount(amount)),
            None => overflow!("-({})", self.amount),
        }
    }

    /// Absolute value; fails for `i64::MIN`.
    pub fn abs(&self) -> Result<Moneypenny> {
        match self.amount.checked_abs() {
            Some(amount) => Ok(self.with_amount(amount)),
            None => overflow!("|{}|", self.amount),
        }
    }

    /// Add one minor unit.
    pub fn increment(&self) -> Result<Moneypenny> {
        self.plus_integer(1)
    }

    /// Subtract one minor unit.
    pub fn decrement(&self) -> Result<Moneypenny> {
        self.minus_integer(1)
    }

    /// Order by amount; both values must share a currency.
    pub fn compare_to(&self, other: &Moneypenny) -> Result<Ordering> {
        self.currency.ensure_same(&other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn with_amount(&self, amount: i64) -> Moneypenny {
        Moneypenny {
            amount,
            currency: self.currency,
        }
    }

    fn checked(&self, result: Option<i64>, op: &str, rhs: i64) -> Result<Moneypenny> {
        match result {
            Some(amount) => Ok(self.with_amount(amount)),
            None => overflow!("{} {op} {rhs} overflows i64", self.amount),
        }
    }

    // ── Conversions ──────────────────────────────────────────────────────

    /// Exact amount in major units.
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.decimal_places())
    }

    /// Lossless conversion to a normalized [`Money`].
    pub fn to_money(&self) -> Money {
        Money::assemble(self.to_major(), self.currency, true)
    }

    // ── Formatting ───────────────────────────────────────────────────────

    /// Format with the invariant formatter; `format` is `""`, `G`, `F` or `N`.
    pub fn to_string_with(&self, format: &str) -> Result<String> {
        self.format_with(format, &InvariantFormatter)
    }

    /// Format with a caller-supplied formatter.
    pub fn format_with(&self, format: &str, formatter: &dyn MoneyFormatter) -> Result<String> {
        let spec = FormatSpec::parse_single(format)?;
        Ok(self.render(spec, formatter))
    }

    fn render(&self, spec: FormatSpec, formatter: &dyn MoneyFormatter) -> String {
        let spec = spec.or_places(Some(self.currency.decimal_places()));
        formatter.format_money(&spec, self.to_major(), self.currency.code())
    }
}

fn ensure_fixed(currency: Currency) -> Result<()> {
    ensure!(
        currency.has_fixed_decimal_places(),
        "{currency} has no fixed number of decimal places"
    );
    Ok(())
}

impl Add for Moneypenny {
    type Output = Result<Moneypenny>;

    fn add(self, rhs: Moneypenny) -> Result<Moneypenny> {
        self.plus(&rhs)
    }
}

impl Sub for Moneypenny {
    type Output = Result<Moneypenny>;

    fn sub(self, rhs: Moneypenny) -> Result<Moneypenny> {
        self.minus(&rhs)
    }
}

impl Neg for Moneypenny {
    type Output = Result<Moneypenny>;

    fn neg(self) -> Result<Moneypenny> {
        self.negate()
    }
}

impl TryFrom<Money> for Moneypenny {
    type Error = Error;

    fn try_from(money: Money) -> Result<Self> {
        money.to_penny()
    }
}

impl std::fmt::Display for Moneypenny {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(FormatSpec::default(), &InvariantFormatter))
    }
}
