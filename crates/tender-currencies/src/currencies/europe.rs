//! European currencies.

use super::IsoCurrency;

/// Active ISO 4217 codes circulating in Europe.
pub static EUROPE: &[IsoCurrency] = &[
    IsoCurrency::new("ALL", 8, Some(2), "Lek"),
    IsoCurrency::new("BAM", 977, Some(2), "Convertible Mark"),
    IsoCurrency::new("BGN", 975, Some(2), "Bulgarian Lev"),
    IsoCurrency::new("BYN", 933, Some(2), "Belarusian Ruble"),
    IsoCurrency::new("CHE", 947, Some(2), "WIR Euro"),
    IsoCurrency::new("CHF", 756, Some(2), "Swiss Franc"),
    IsoCurrency::new("CHW", 948, Some(2), "WIR Franc"),
    IsoCurrency::new("CZK", 203, Some(2), "Czech Koruna"),
    IsoCurrency::new("DKK", 208, Some(2), "Danish Krone"),
    IsoCurrency::new("EUR", 978, Some(2), "Euro"),
    IsoCurrency::new("GBP", 826, Some(2), "Pound Sterling"),
    IsoCurrency::new("GIP", 292, Some(2), "Gibraltar Pound"),
    IsoCurrency::new("HUF", 348, Some(2), "Forint"),
    IsoCurrency::new("ISK", 352, Some(0), "Iceland Krona"),
    IsoCurrency::new("MDL", 498, Some(2), "Moldovan Leu"),
    IsoCurrency::new("MKD", 807, Some(2), "Denar"),
    IsoCurrency::new("NOK", 578, Some(2), "Norwegian Krone"),
    IsoCurrency::new("PLN", 985, Some(2), "Zloty"),
    IsoCurrency::new("RON", 946, Some(2), "Romanian Leu"),
    IsoCurrency::new("RSD", 941, Some(2), "Serbian Dinar"),
    IsoCurrency::new("RUB", 643, Some(2), "Russian Ruble"),
    IsoCurrency::new("SEK", 752, Some(2), "Swedish Krona"),
    IsoCurrency::new("UAH", 980, Some(2), "Hryvnia"),
];
