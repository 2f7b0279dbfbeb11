//! Oceanian currencies.

use super::IsoCurrency;

/// Active ISO 4217 codes circulating in Oceania.
pub static OCEANIA: &[IsoCurrency] = &[
    IsoCurrency::new("AUD", 36, Some(2), "Australian Dollar"),
    IsoCurrency::new("FJD", 242, Some(2), "Fiji Dollar"),
    IsoCurrency::new("NZD", 554, Some(2), "New Zealand Dollar"),
    IsoCurrency::new("PGK", 598, Some(2), "Kina"),
    IsoCurrency::new("SBD", 90, Some(2), "Solomon Islands Dollar"),
    IsoCurrency::new("TOP", 776, Some(2), "Pa'anga"),
    IsoCurrency::new("VUV", 548, Some(0), "Vatu"),
    IsoCurrency::new("WST", 882, Some(2), "Tala"),
    IsoCurrency::new("XPF", 953, Some(0), "CFP Franc"),
];
