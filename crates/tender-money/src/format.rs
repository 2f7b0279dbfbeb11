//! Format specifiers and the formatter hook.
//!
//! The mini-language is a single letter, optionally followed by a number of
//! decimal places:
//!
//! | spec      | meaning                                              |
//! |-----------|------------------------------------------------------|
//! | `""`, `G` | general: the amount as stored                        |
//! | `F`       | fixed: the currency's decimal places                 |
//! | `N`       | like `F`, with `,` between groups of thousands       |
//! | `F4`, `N0`| explicit number of decimal places (0 to 28)          |
//!
//! Letters are case-insensitive. Turning a resolved [`FormatSpec`] into
//! text is the job of a [`MoneyFormatter`]; [`InvariantFormatter`] is the
//! culture-neutral implementation used by `Display`.

use rust_decimal::Decimal;
use tender_core::{ensure, Error, Result, RoundingMode};
use tender_math::{round, MAX_SCALE};

/// The letter part of a format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatKind {
    /// `G`
    #[default]
    General,
    /// `F`
    Fixed,
    /// `N`
    Number,
}

impl FormatKind {
    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'G' => Some(FormatKind::General),
            'F' => Some(FormatKind::Fixed),
            'N' => Some(FormatKind::Number),
            _ => None,
        }
    }
}

/// A parsed format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatSpec {
    /// Which layout to use.
    pub kind: FormatKind,
    /// Number of decimal places to show; `None` shows the amount as is.
    pub decimal_places: Option<u32>,
}

impl FormatSpec {
    /// Parse a specifier with an optional decimal-places override.
    pub fn parse(format: &str) -> Result<Self> {
        let mut chars = format.chars();
        let Some(letter) = chars.next() else {
            return Ok(FormatSpec::default());
        };
        let kind = FormatKind::from_letter(letter).ok_or_else(|| invalid(format))?;
        let digits = chars.as_str();
        if digits.is_empty() {
            return Ok(FormatSpec {
                kind,
                decimal_places: None,
            });
        }
        ensure!(
            digits.bytes().all(|b| b.is_ascii_digit()),
            "invalid format specifier {format:?}"
        );
        let places: u32 = digits.parse().map_err(|_| invalid(format))?;
        ensure!(
            places <= MAX_SCALE,
            "decimal places in {format:?} out of range [0, {MAX_SCALE}]"
        );
        Ok(FormatSpec {
            kind,
            decimal_places: Some(places),
        })
    }

    /// Parse a specifier that must be a single letter (or empty).
    pub fn parse_single(format: &str) -> Result<Self> {
        ensure!(
            format.chars().count() <= 1,
            "format specifier must be a single character, got {format:?}"
        );
        Self::parse(format)
    }

    /// Fill in `places` unless an explicit override was given.
    pub fn or_places(self, places: Option<u32>) -> Self {
        FormatSpec {
            decimal_places: self.decimal_places.or(places),
            ..self
        }
    }
}

impl std::str::FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormatSpec::parse(s)
    }
}

fn invalid(format: &str) -> Error {
    Error::InvalidArgument(format!("invalid format specifier {format:?}"))
}

/// Turns an amount and a currency code into text.
pub trait MoneyFormatter {
    /// Render `amount` in the currency `currency_code` following `spec`.
    fn format_money(&self, spec: &FormatSpec, amount: Decimal, currency_code: &str) -> String;
}

/// Culture-neutral formatting: `.` as decimal separator, `,` for grouping,
/// the code after the number (`1,234.50 EUR`).
///
/// Amounts shown with fewer decimal places than they carry are rounded half
/// away from zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantFormatter;

impl MoneyFormatter for InvariantFormatter {
    fn format_money(&self, spec: &FormatSpec, amount: Decimal, currency_code: &str) -> String {
        let mut value = amount;
        let mut text = value.to_string();
        if let Some(places) = spec.decimal_places {
            value = round(value, places, RoundingMode::HalfAwayFromZero);
            value.rescale(places);
            text = value.to_string();
            // `rescale` cannot add scale once the integer part fills the mantissa.
            let missing = places.saturating_sub(value.scale());
            if missing > 0 {
                if value.scale() == 0 {
                    text.push('.');
                }
                text.extend(std::iter::repeat('0').take(missing as usize));
            }
        }
        let number = match spec.kind {
            FormatKind::General | FormatKind::Fixed => text,
            FormatKind::Number => group_thousands(&text),
        };
        format!("{number} {currency_code}")
    }
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
