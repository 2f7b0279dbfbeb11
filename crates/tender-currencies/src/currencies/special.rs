//! Supranational units, precious metals, and reserved codes.

use super::IsoCurrency;

/// Active ISO 4217 codes not tied to a circulating national currency.
pub static SPECIAL: &[IsoCurrency] = &[
    IsoCurrency::new("XAG", 961, None, "Silver"),
    IsoCurrency::new("XAU", 959, None, "Gold"),
    IsoCurrency::new("XBA", 955, None, "Bond Markets Unit European Composite Unit (EURCO)"),
    IsoCurrency::new("XBB", 956, None, "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    IsoCurrency::new("XBC", 957, None, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    IsoCurrency::new("XBD", 958, None, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    IsoCurrency::new("XDR", 960, None, "SDR (Special Drawing Right)"),
    IsoCurrency::new("XPD", 964, None, "Palladium"),
    IsoCurrency::new("XPT", 962, None, "Platinum"),
    IsoCurrency::new("XSU", 994, None, "Sucre"),
    IsoCurrency::new("XTS", 963, None, "Codes specifically reserved for testing purposes"),
    IsoCurrency::new("XUA", 965, None, "ADB Unit of Account"),
    IsoCurrency::new("XXX", 999, None, "No currency"),
];
