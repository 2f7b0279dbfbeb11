//! African currencies.

use super::IsoCurrency;

/// Active ISO 4217 codes circulating in Africa.
pub static AFRICA: &[IsoCurrency] = &[
    IsoCurrency::new("AOA", 973, Some(2), "Kwanza"),
    IsoCurrency::new("BIF", 108, Some(0), "Burundi Franc"),
    IsoCurrency::new("BWP", 72, Some(2), "Pula"),
    IsoCurrency::new("CDF", 976, Some(2), "Congolese Franc"),
    IsoCurrency::new("CVE", 132, Some(2), "Cabo Verde Escudo"),
    IsoCurrency::new("DJF", 262, Some(0), "Djibouti Franc"),
    IsoCurrency::new("DZD", 12, Some(2), "Algerian Dinar"),
    IsoCurrency::new("EGP", 818, Some(2), "Egyptian Pound"),
    IsoCurrency::new("ERN", 232, Some(2), "Nakfa"),
    IsoCurrency::new("ETB", 230, Some(2), "Ethiopian Birr"),
    IsoCurrency::new("GHS", 936, Some(2), "Ghana Cedi"),
    IsoCurrency::new("GMD", 270, Some(2), "Dalasi"),
    IsoCurrency::new("GNF", 324, Some(0), "Guinean Franc"),
    IsoCurrency::new("KES", 404, Some(2), "Kenyan Shilling"),
    IsoCurrency::new("KMF", 174, Some(0), "Comorian Franc"),
    IsoCurrency::new("LRD", 430, Some(2), "Liberian Dollar"),
    IsoCurrency::new("LSL", 426, Some(2), "Loti"),
    IsoCurrency::new("LYD", 434, Some(3), "Libyan Dinar"),
    IsoCurrency::new("MAD", 504, Some(2), "Moroccan Dirham"),
    IsoCurrency::new("MGA", 969, Some(2), "Malagasy Ariary"),
    IsoCurrency::new("MRU", 929, Some(2), "Ouguiya"),
    IsoCurrency::new("MUR", 480, Some(2), "Mauritius Rupee"),
    IsoCurrency::new("MWK", 454, Some(2), "Malawi Kwacha"),
    IsoCurrency::new("MZN", 943, Some(2), "Mozambique Metical"),
    IsoCurrency::new("NAD", 516, Some(2), "Namibia Dollar"),
    IsoCurrency::new("NGN", 566, Some(2), "Naira"),
    IsoCurrency::new("RWF", 646, Some(0), "Rwanda Franc"),
    IsoCurrency::new("SCR", 690, Some(2), "Seychelles Rupee"),
    IsoCurrency::new("SDG", 938, Some(2), "Sudanese Pound"),
    IsoCurrency::new("SHP", 654, Some(2), "Saint Helena Pound"),
    IsoCurrency::new("SLE", 925, Some(2), "Leone"),
    IsoCurrency::new("SOS", 706, Some(2), "Somali Shilling"),
    IsoCurrency::new("SSP", 728, Some(2), "South Sudanese Pound"),
    IsoCurrency::new("STN", 930, Some(2), "Dobra"),
    IsoCurrency::new("SZL", 748, Some(2), "Lilangeni"),
    IsoCurrency::new("TND", 788, Some(3), "Tunisian Dinar"),
    IsoCurrency::new("TZS", 834, Some(2), "Tanzanian Shilling"),
    IsoCurrency::new("UGX", 800, Some(0), "Uganda Shilling"),
    IsoCurrency::new("XAF", 950, Some(0), "CFA Franc BEAC"),
    IsoCurrency::new("XOF", 952, Some(0), "CFA Franc BCEAO"),
    IsoCurrency::new("ZAR", 710, Some(2), "Rand"),
    IsoCurrency::new("ZMW", 967, Some(2), "Zambian Kwacha"),
    IsoCurrency::new("ZWG", 924, Some(2), "Zimbabwe Gold"),
];
