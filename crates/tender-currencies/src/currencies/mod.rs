//! ISO 4217 currency tables, organized by region.
//!
//! The active tables list every code currently published by ISO 4217
//! together with its numeric code and minor-unit count. Codes for which
//! ISO publishes no minor units ("N.A.": precious metals, bond-market
//! units, testing codes) carry `None`. The [`withdrawn`] table lists
//! legacy codes whose precision is no longer documented.

pub mod africa;
pub mod america;
pub mod asia;
pub mod europe;
pub mod oceania;
pub mod special;
pub mod withdrawn;

/// One row of the ISO 4217 active-codes table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoCurrency {
    /// Alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Minor units, or `None` where ISO publishes "N.A.".
    pub minor_units: Option<u8>,
    /// English name.
    pub name: &'static str,
}

impl IsoCurrency {
    pub(crate) const fn new(
        code: &'static str,
        numeric_code: u16,
        minor_units: Option<u8>,
        name: &'static str,
    ) -> Self {
        Self {
            code,
            numeric_code,
            minor_units,
            name,
        }
    }
}

/// Every active ISO 4217 currency, region by region.
pub fn active() -> impl Iterator<Item = &'static IsoCurrency> {
    africa::AFRICA
        .iter()
        .chain(america::AMERICA)
        .chain(asia::ASIA)
        .chain(europe::EUROPE)
        .chain(oceania::OCEANIA)
        .chain(special::SPECIAL)
}

/// Look up the active ISO row for `code`.
pub fn find(code: &str) -> Option<&'static IsoCurrency> {
    active().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_well_formed(code: &str) -> bool {
        code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
    }

    #[test]
    fn usd_properties() {
        let usd = find("USD").unwrap();
        assert_eq!(usd.numeric_code, 840);
        assert_eq!(usd.minor_units, Some(2));
    }

    #[test]
    fn jpy_no_fractions() {
        assert_eq!(find("JPY").unwrap().minor_units, Some(0));
        assert_eq!(find("KWD").unwrap().minor_units, Some(3));
        assert_eq!(find("CLF").unwrap().minor_units, Some(4));
    }

    #[test]
    fn metals_have_no_minor_units() {
        for code in ["XAU", "XAG", "XPD", "XPT", "XXX", "XTS"] {
            assert_eq!(find(code).unwrap().minor_units, None, "{code}");
        }
    }

    #[test]
    fn codes_are_well_formed_and_unique() {
        let mut seen = HashSet::new();
        for c in active() {
            assert!(is_well_formed(c.code), "malformed code {:?}", c.code);
            assert!(seen.insert(c.code), "duplicate active code {}", c.code);
            assert!(c.minor_units.map_or(true, |mu| mu <= 4), "suspect minor units for {}", c.code);
        }
        let mut numeric = HashSet::new();
        for c in active() {
            assert!(numeric.insert(c.numeric_code), "duplicate numeric code {}", c.numeric_code);
        }
    }

    #[test]
    fn withdrawn_codes_are_disjoint_from_active() {
        let active: HashSet<_> = active().map(|c| c.code).collect();
        let mut seen = HashSet::new();
        for (code, name) in withdrawn::WITHDRAWN {
            assert!(is_well_formed(code), "malformed withdrawn code {code:?}");
            assert!(!name.is_empty());
            assert!(!active.contains(code), "{code} is both active and withdrawn");
            assert!(seen.insert(*code), "duplicate withdrawn code {code}");
        }
    }
}
