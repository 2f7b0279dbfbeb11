//! `Currency`: a registered currency code and its precision metadata.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use tender_core::{Error, Result};
use tender_math::{epsilon, pow10, MAX_SCALE};

use crate::currencies;
use crate::registry::{CurrencyRegistry, CurrencyTypes};

/// Minor-unit count reported by currencies whose precision is undocumented.
///
/// Amounts in such currencies are never rounded automatically.
pub const UNKNOWN_MINOR_UNITS: u8 = 28;

/// A currency: a three-letter code plus the minor-unit count the registry
/// holds for it.
///
/// Values are only handed out by [`CurrencyRegistry`] lookups, so the code
/// is always registered. Equality and hashing look at the code alone; the
/// minor units are derived from it.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    code: &'static str,
    minor_units: Option<u8>,
}

impl Currency {
    /// The neutral "no currency" unit (`XXX`).
    pub const NONE: Currency = Currency {
        code: "XXX",
        minor_units: None,
    };

    pub(crate) const fn new(code: &'static str, minor_units: Option<u8>) -> Self {
        Self { code, minor_units }
    }

    // ── Lookups through the global registry ──────────────────────────────

    /// Look up an active or user-defined currency.
    ///
    /// Fails with [`Error::InvalidArgument`] for a malformed code and with
    /// [`Error::CurrencyNotFound`] for an unknown one.
    pub fn of(code: &str) -> Result<Currency> {
        CurrencyRegistry::global().of(code)
    }

    /// Like [`Currency::of`] but returns `None` instead of failing.
    pub fn try_create(code: &str) -> Option<Currency> {
        CurrencyRegistry::global().try_create(code)
    }

    /// Look up `code` among the sets selected by `types`.
    pub fn try_create_with(code: &str, types: CurrencyTypes) -> Option<Currency> {
        CurrencyRegistry::global().try_create_with(code, types)
    }

    /// Register a user-defined currency in the global registry.
    ///
    /// See [`CurrencyRegistry::register_currency`].
    pub fn register(code: &str, minor_units: Option<u8>) -> Result<bool> {
        CurrencyRegistry::global().register_currency(code, minor_units)
    }

    /// Register several user-defined currencies at once, all or nothing.
    ///
    /// See [`CurrencyRegistry::register_currencies`].
    pub fn register_many<I, S>(entries: I) -> Result<bool>
    where
        I: IntoIterator<Item = (S, Option<u8>)>,
        S: AsRef<str>,
    {
        CurrencyRegistry::global().register_currencies(entries)
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Alphabetic code, e.g. `"EUR"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Minor units as registered, `None` when not applicable.
    pub fn minor_units(&self) -> Option<u8> {
        self.minor_units
    }

    /// Number of decimal places amounts are normalized to.
    pub fn decimal_places(&self) -> u32 {
        u32::from(self.minor_units.unwrap_or(0))
    }

    /// `false` only for the unknown-minor-units sentinel.
    pub fn has_fixed_decimal_places(&self) -> bool {
        self.decimal_places() != MAX_SCALE
    }

    /// Whether the currency has a documented, non-zero subdivision.
    pub fn has_minor_currency(&self) -> bool {
        matches!(self.minor_units, Some(mu) if mu != 0 && mu != UNKNOWN_MINOR_UNITS)
    }

    /// Smallest representable step, `10^-decimal_places`.
    pub fn epsilon(&self) -> Decimal {
        epsilon(self.decimal_places())
    }

    /// Minor units per major unit, `10^decimal_places`.
    pub fn factor(&self) -> Decimal {
        pow10(self.decimal_places())
    }

    /// ISO 4217 reserves `X` codes for units that are not a national
    /// currency: supranational currencies, metals, bond units, test codes.
    pub fn is_meta_currency(&self) -> bool {
        self.code.starts_with('X')
    }

    /// A meta currency without subdivision: a unit of account rather than
    /// something that circulates (gold, SDR, `XTS`, `XXX`, ...).
    pub fn is_pseudo_currency(&self) -> bool {
        self.is_meta_currency() && self.minor_units.is_none()
    }

    /// Whether this is [`Currency::NONE`].
    pub fn is_none(&self) -> bool {
        self.code == Currency::NONE.code
    }

    /// ISO numeric code, for active ISO currencies only.
    pub fn numeric_code(&self) -> Option<u16> {
        currencies::find(self.code).map(|c| c.numeric_code)
    }

    /// Fail with [`Error::CurrencyMismatch`] unless `other` is the same currency.
    pub fn ensure_same(&self, other: &Currency) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::mismatch(self.code, other.code))
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Currency::of(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn eur_and_jpy_precision() {
        let eur = Currency::of("EUR").unwrap();
        assert_eq!(eur.decimal_places(), 2);
        assert_eq!(eur.epsilon(), dec!(0.01));
        assert_eq!(eur.factor(), dec!(100));
        assert!(eur.has_minor_currency());

        let jpy = Currency::of("JPY").unwrap();
        assert_eq!(jpy.decimal_places(), 0);
        assert_eq!(jpy.factor(), dec!(1));
        assert!(jpy.has_fixed_decimal_places());
        assert!(!jpy.has_minor_currency());
    }

    #[test]
    fn meta_and_pseudo_currencies() {
        let gold = Currency::of("XAU").unwrap();
        assert!(gold.is_meta_currency());
        assert!(gold.is_pseudo_currency());
        assert_eq!(gold.decimal_places(), 0);

        let cfa = Currency::of("XOF").unwrap();
        assert!(cfa.is_meta_currency());
        assert!(!cfa.is_pseudo_currency());

        assert!(!Currency::of("USD").unwrap().is_meta_currency());
        assert!(Currency::NONE.is_none());
        assert!(Currency::NONE.is_pseudo_currency());
    }

    #[test]
    fn withdrawn_currency_has_no_fixed_places() {
        assert!(Currency::try_create("DEM").is_none());
        let dem = Currency::try_create_with("DEM", CurrencyTypes::WITHDRAWN).unwrap();
        assert_eq!(dem.minor_units(), Some(UNKNOWN_MINOR_UNITS));
        assert_eq!(dem.decimal_places(), 28);
        assert!(!dem.has_fixed_decimal_places());
        assert!(!dem.has_minor_currency());
        assert_eq!(dem.epsilon(), Decimal::new(1, 28));
        assert_eq!(dem.numeric_code(), None);
    }

    #[test]
    fn equality_is_by_code() {
        let a = Currency::of("CHF").unwrap();
        let b: Currency = "CHF".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Currency::of("EUR").unwrap());
        assert_eq!(a.numeric_code(), Some(756));
        assert_eq!(a.to_string(), "CHF");
    }

    #[test]
    fn lookup_failures() {
        assert!(matches!(Currency::of("QQQ"), Err(Error::CurrencyNotFound(code)) if code == "QQQ"));
        assert!(matches!(Currency::of("eur"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Currency::of("EURO"), Err(Error::InvalidArgument(_))));
        assert!(Currency::try_create("eur").is_none());
    }

    #[test]
    fn ensure_same_reports_both_codes() {
        let eur = Currency::of("EUR").unwrap();
        let usd = Currency::of("USD").unwrap();
        assert!(eur.ensure_same(&eur).is_ok());
        assert_eq!(
            eur.ensure_same(&usd),
            Err(Error::CurrencyMismatch {
                left: "EUR".into(),
                right: "USD".into()
            })
        );
    }
}
