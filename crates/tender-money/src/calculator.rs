//! Rounding-aware arithmetic and currency-consistent aggregation.
//!
//! The functions here take an explicit [`RoundingPolicy`] and always return
//! normalized results. Folds run left to right; the first element fixes the
//! currency and the fold stops at the first element in another one.

use std::borrow::Borrow;
use std::cmp::Ordering;

use rust_decimal::Decimal;
use tender_core::{ensure, overflow, Error, Result};
use tender_currencies::Currency;
use tender_math::RoundingPolicy;

use crate::money::Money;

// ── Rounding ─────────────────────────────────────────────────────────────

/// The amount rounded to the currency's decimal places.
pub fn round(money: &Money, policy: &RoundingPolicy) -> Decimal {
    round_to(money, money.currency().decimal_places(), policy)
}

/// The amount rounded to `decimal_places`; unchanged when `money` is
/// already normalized at that precision.
pub fn round_to(money: &Money, decimal_places: u32, policy: &RoundingPolicy) -> Decimal {
    if money.is_normalized() && money.currency().decimal_places() == decimal_places {
        money.amount()
    } else {
        policy.round_to(money.amount(), decimal_places)
    }
}

// ── Arithmetic ───────────────────────────────────────────────────────────

/// `a + b`, normalized.
pub fn add(a: &Money, b: &Money, policy: &RoundingPolicy) -> Result<Money> {
    Ok(a.plus(b)?.normalize(policy))
}

/// `money + amount`, normalized.
pub fn add_amount(money: &Money, amount: Decimal, policy: &RoundingPolicy) -> Result<Money> {
    Ok(money.plus_amount(amount)?.normalize(policy))
}

/// `a - b`, normalized.
pub fn subtract(a: &Money, b: &Money, policy: &RoundingPolicy) -> Result<Money> {
    Ok(a.minus(b)?.normalize(policy))
}

/// `money - amount`, normalized.
pub fn subtract_amount(money: &Money, amount: Decimal, policy: &RoundingPolicy) -> Result<Money> {
    Ok(money.minus_amount(amount)?.normalize(policy))
}

/// `money * factor`, normalized.
pub fn multiply(money: &Money, factor: Decimal, policy: &RoundingPolicy) -> Result<Money> {
    Ok(money.multiply_by(factor)?.normalize(policy))
}

/// `money / divisor`, normalized.
pub fn divide(money: &Money, divisor: Decimal, policy: &RoundingPolicy) -> Result<Money> {
    Ok(money.divide_by(divisor)?.normalize(policy))
}

/// `money % divisor`, normalized.
pub fn remainder(money: &Money, divisor: Decimal, policy: &RoundingPolicy) -> Result<Money> {
    Ok(money.rem(divisor)?.normalize(policy))
}

/// Truncating quotient and remainder with `q * divisor + r == dividend`.
///
/// The quotient is a whole number of major units.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_currencies::Currency;
/// use tender_money::{calculator, Money};
///
/// let eur = Currency::of("EUR").unwrap();
/// let (q, r) = calculator::div_rem(&Money::from_major(dec!(-10.50), eur), 4).unwrap();
/// assert_eq!(q.amount(), dec!(-2));
/// assert_eq!(r.amount(), dec!(-2.50));
/// ```
pub fn div_rem(dividend: &Money, divisor: i64) -> Result<(Money, Money)> {
    ensure!(divisor != 0, "division of {dividend} by zero");
    let currency = dividend.currency();
    let amount = dividend.amount();
    let d = Decimal::from(divisor);

    // The remainder is exact; dividing `amount - remainder` by the divisor
    // then leaves nothing to round.
    let Some(remainder) = amount.checked_rem(d) else {
        overflow!("{amount} % {divisor}");
    };
    let Some(quotient) = amount
        .checked_sub(remainder)
        .and_then(|multiple| multiple.checked_div(d))
        .map(|q| q.trunc())
    else {
        overflow!("({amount} - {remainder}) / {divisor}");
    };
    Ok((
        Money::assemble(quotient, currency, true),
        Money::assemble(remainder, currency, dividend.is_normalized()),
    ))
}

/// The larger of two amounts in the same currency (`a` on ties).
pub fn max(a: &Money, b: &Money) -> Result<Money> {
    Ok(match a.compare_to(b)? {
        Ordering::Less => *b,
        _ => *a,
    })
}

/// The smaller of two amounts in the same currency (`a` on ties).
pub fn min(a: &Money, b: &Money) -> Result<Money> {
    Ok(match a.compare_to(b)? {
        Ordering::Greater => *b,
        _ => *a,
    })
}

// ── Aggregation ──────────────────────────────────────────────────────────

struct Accumulator<'p> {
    policy: Option<&'p RoundingPolicy>,
    currency: Option<Currency>,
    total: Decimal,
    count: u64,
    all_normalized: bool,
}

impl<'p> Accumulator<'p> {
    fn new(policy: Option<&'p RoundingPolicy>) -> Self {
        Self {
            policy,
            currency: None,
            total: Decimal::ZERO,
            count: 0,
            all_normalized: true,
        }
    }

    fn push(&mut self, money: &Money) -> Result<()> {
        match self.currency {
            Some(currency) => currency.ensure_same(&money.currency())?,
            None => self.currency = Some(money.currency()),
        }
        let term = match self.policy {
            Some(policy) => round(money, policy),
            None => money.amount(),
        };
        let Some(total) = self.total.checked_add(term) else {
            overflow!("sum exceeds the decimal range after {} terms", self.count);
        };
        self.total = total;
        self.count += 1;
        self.all_normalized &= money.is_normalized();
        Ok(())
    }

    fn extend<I>(mut self, moneys: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Money>,
    {
        for money in moneys {
            self.push(money.borrow())?;
        }
        Ok(self)
    }

    fn sum(self) -> Money {
        match self.currency {
            Some(currency) => Money::assemble(
                self.total,
                currency,
                self.policy.is_some() || self.all_normalized,
            ),
            None => Money::zero(Currency::NONE),
        }
    }

    fn average(self) -> Result<Money> {
        let Some(currency) = self.currency else {
            return Err(Error::InvalidArgument(
                "cannot average an empty sequence".into(),
            ));
        };
        let count = Decimal::from(self.count);
        let Some(mean) = self.total.checked_div(count) else {
            overflow!("{} / {count}", self.total);
        };
        Ok(match self.policy {
            Some(policy) => Money::from_major_with(mean, currency, policy),
            None => Money::of_major(mean, currency),
        })
    }
}

/// Sum of same-currency amounts, without rounding.
///
/// The result is normalized iff every term is. An empty input sums to zero
/// in [`Currency::NONE`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use tender_currencies::Currency;
/// use tender_money::{calculator, Money};
///
/// let eur = Currency::of("EUR").unwrap();
/// let parts = [Money::from_major(dec!(1.10), eur), Money::from_major(dec!(2.20), eur)];
/// assert_eq!(calculator::sum(&parts).unwrap().amount(), dec!(3.30));
/// assert!(calculator::sum(Vec::<Money>::new()).unwrap().currency().is_none());
/// ```
pub fn sum<I>(moneys: I) -> Result<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    Ok(Accumulator::new(None).extend(moneys)?.sum())
}

/// Sum with every term rounded under `policy` first; normalized.
pub fn sum_with<I>(moneys: I, policy: &RoundingPolicy) -> Result<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    Ok(Accumulator::new(Some(policy)).extend(moneys)?.sum())
}

/// [`sum`] skipping `None` elements.
pub fn sum_optional<I, M>(moneys: I) -> Result<Money>
where
    I: IntoIterator<Item = Option<M>>,
    M: Borrow<Money>,
{
    sum(moneys.into_iter().flatten())
}

/// [`sum_with`] skipping `None` elements.
pub fn sum_optional_with<I, M>(moneys: I, policy: &RoundingPolicy) -> Result<Money>
where
    I: IntoIterator<Item = Option<M>>,
    M: Borrow<Money>,
{
    sum_with(moneys.into_iter().flatten(), policy)
}

/// Arithmetic mean, not normalized. Fails on an empty input.
pub fn average<I>(moneys: I) -> Result<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    Accumulator::new(None).extend(moneys)?.average()
}

/// Mean of the rounded terms, itself rounded under `policy`.
pub fn average_with<I>(moneys: I, policy: &RoundingPolicy) -> Result<Money>
where
    I: IntoIterator,
    I::Item: Borrow<Money>,
{
    Accumulator::new(Some(policy)).extend(moneys)?.average()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tender_core::RoundingMode;
    use tender_math::IncrementRounding;

    fn eur() -> Currency {
        Currency::of("EUR").unwrap()
    }

    #[test]
    fn round_skips_normalized_amounts() {
        let m = Money::from_major_with(dec!(1.235), eur(), &RoundingPolicy::HALF_AWAY_FROM_ZERO);
        assert_eq!(m.amount(), dec!(1.24));
        // truncating would give 1.23 if applied again
        assert_eq!(round(&m, &RoundingPolicy::TRUNCATE), dec!(1.24));
        assert_eq!(round_to(&m, 1, &RoundingPolicy::TRUNCATE), dec!(1.2));
        let raw = Money::of_major(dec!(1.239), eur());
        assert_eq!(round(&raw, &RoundingPolicy::TRUNCATE), dec!(1.23));
    }

    #[test]
    fn arithmetic_normalizes() {
        let policy = RoundingPolicy::HALF_TO_EVEN;
        let m = Money::from_major(dec!(10.00), eur());
        let third = divide(&m, dec!(3), &policy).unwrap();
        assert_eq!(third.amount(), dec!(3.33));
        assert!(third.is_normalized());
        assert_eq!(multiply(&m, dec!(0.125), &policy).unwrap().amount(), dec!(1.25));
        assert_eq!(add_amount(&m, dec!(0.005), &policy).unwrap().amount(), dec!(10.00));
        assert_eq!(subtract_amount(&m, dec!(0.015), &policy).unwrap().amount(), dec!(9.98));
        assert_eq!(remainder(&m, dec!(3), &policy).unwrap().amount(), dec!(1.00));

        let raw = Money::of_major(dec!(0.004), eur());
        let total = add(&m, &raw, &policy).unwrap();
        assert_eq!(total.amount(), dec!(10.00));
        assert!(total.is_normalized());
        assert_eq!(subtract(&m, &raw, &policy).unwrap().amount(), dec!(10.00));
    }

    #[test]
    fn cash_rounding_policy() {
        let chf = Currency::of("CHF").unwrap();
        let cash = RoundingPolicy::adjuster(
            IncrementRounding::new(dec!(0.05), RoundingMode::HalfAwayFromZero).unwrap(),
        );
        let m = Money::from_major_with(dec!(10.03), chf, &cash);
        assert_eq!(m.amount(), dec!(10.05));
        let parts = [Money::of_major(dec!(1.02), chf), Money::of_major(dec!(1.02), chf)];
        assert_eq!(sum_with(&parts, &cash).unwrap().amount(), dec!(2.00));
    }

    #[test]
    fn sum_of_nothing_is_zero_xxx() {
        let total = sum(Vec::<Money>::new()).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::NONE);
        let none: [Option<Money>; 2] = [None, None];
        assert!(sum_optional(none).unwrap().currency().is_none());
    }

    #[test]
    fn sum_with_rounds_each_term() {
        let parts = [
            Money::of_major(dec!(0.005), eur()),
            Money::of_major(dec!(0.005), eur()),
            Money::of_major(dec!(0.005), eur()),
        ];
        let raw = sum(&parts).unwrap();
        assert_eq!(raw.amount(), dec!(0.015));
        assert!(!raw.is_normalized());
        let rounded = sum_with(&parts, &RoundingPolicy::HALF_AWAY_FROM_ZERO).unwrap();
        assert_eq!(rounded.amount(), dec!(0.03));
        assert!(rounded.is_normalized());
    }

    #[test]
    fn sum_optional_skips_gaps() {
        let a = Money::from_major(dec!(1), eur());
        let total = sum_optional([Some(a), None, Some(a)]).unwrap();
        assert_eq!(total.amount(), dec!(2));
        assert!(total.is_normalized());
        let total = sum_optional_with([None, Some(&a)], &RoundingPolicy::TRUNCATE).unwrap();
        assert_eq!(total.amount(), dec!(1));
    }

    #[test]
    fn fold_stops_at_first_mismatch() {
        let usd = Currency::of("USD").unwrap();
        let gbp = Currency::of("GBP").unwrap();
        let parts = [
            Money::zero(eur()),
            Money::zero(usd),
            Money::zero(gbp),
        ];
        assert_eq!(sum(&parts), Err(Error::mismatch("EUR", "USD")));
        assert_eq!(average(&parts), Err(Error::mismatch("EUR", "USD")));
    }

    #[test]
    fn averages() {
        let parts = [
            Money::from_major(dec!(1.00), eur()),
            Money::from_major(dec!(2.00), eur()),
            Money::from_major(dec!(2.00), eur()),
        ];
        let mean = average(&parts).unwrap();
        assert!(!mean.is_normalized());
        assert_eq!(
            average_with(&parts, &RoundingPolicy::HALF_TO_EVEN).unwrap().amount(),
            dec!(1.67)
        );
        assert!(matches!(
            average(Vec::<Money>::new()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn div_rem_truncates() {
        let m = Money::from_major(dec!(10.75), eur());
        let (q, r) = div_rem(&m, 3).unwrap();
        assert_eq!(q.amount(), dec!(3));
        assert_eq!(r.amount(), dec!(1.75));
        assert!(q.is_normalized());
        assert_eq!(q.amount() * dec!(3) + r.amount(), m.amount());
        assert!(matches!(div_rem(&m, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn div_rem_is_exact_near_the_decimal_limit() {
        let amount = Decimal::MAX - Decimal::ONE;
        let (q, r) = div_rem(&Money::of_major(amount, eur()), 3).unwrap();
        assert_eq!(r.amount(), dec!(2));
        assert_eq!(q.amount(), dec!(26409387504754779197847983444));
        assert_eq!(q.amount() * dec!(3) + r.amount(), amount);

        let (q, r) = div_rem(&Money::of_major(-amount, eur()), 3).unwrap();
        assert_eq!(r.amount(), dec!(-2));
        assert_eq!(q.amount(), dec!(-26409387504754779197847983444));
    }

    #[test]
    fn max_and_min() {
        let a = Money::from_major(dec!(1), eur());
        let b = Money::from_major(dec!(2), eur());
        assert_eq!(max(&a, &b).unwrap(), b);
        assert_eq!(min(&a, &b).unwrap(), a);
        let usd = Money::from_major(dec!(1), Currency::of("USD").unwrap());
        assert!(max(&a, &usd).is_err());
    }
}
