//! Asian and Middle-Eastern currencies.

use super::IsoCurrency;

/// Active ISO 4217 codes circulating in Asia and the Middle East.
pub static ASIA: &[IsoCurrency] = &[
    IsoCurrency::new("AED", 784, Some(2), "UAE Dirham"),
    IsoCurrency::new("AFN", 971, Some(2), "Afghani"),
    IsoCurrency::new("AMD", 51, Some(2), "Armenian Dram"),
    IsoCurrency::new("AZN", 944, Some(2), "Azerbaijan Manat"),
    IsoCurrency::new("BDT", 50, Some(2), "Taka"),
    IsoCurrency::new("BHD", 48, Some(3), "Bahraini Dinar"),
    IsoCurrency::new("BND", 96, Some(2), "Brunei Dollar"),
    IsoCurrency::new("BTN", 64, Some(2), "Ngultrum"),
    IsoCurrency::new("CNY", 156, Some(2), "Yuan Renminbi"),
    IsoCurrency::new("GEL", 981, Some(2), "Lari"),
    IsoCurrency::new("HKD", 344, Some(2), "Hong Kong Dollar"),
    IsoCurrency::new("IDR", 360, Some(2), "Rupiah"),
    IsoCurrency::new("ILS", 376, Some(2), "New Israeli Sheqel"),
    IsoCurrency::new("INR", 356, Some(2), "Indian Rupee"),
    IsoCurrency::new("IQD", 368, Some(3), "Iraqi Dinar"),
    IsoCurrency::new("IRR", 364, Some(2), "Iranian Rial"),
    IsoCurrency::new("JOD", 400, Some(3), "Jordanian Dinar"),
    IsoCurrency::new("JPY", 392, Some(0), "Yen"),
    IsoCurrency::new("KGS", 417, Some(2), "Som"),
    IsoCurrency::new("KHR", 116, Some(2), "Riel"),
    IsoCurrency::new("KPW", 408, Some(2), "North Korean Won"),
    IsoCurrency::new("KRW", 410, Some(0), "Won"),
    IsoCurrency::new("KWD", 414, Some(3), "Kuwaiti Dinar"),
    IsoCurrency::new("KZT", 398, Some(2), "Tenge"),
    IsoCurrency::new("LAK", 418, Some(2), "Lao Kip"),
    IsoCurrency::new("LBP", 422, Some(2), "Lebanese Pound"),
    IsoCurrency::new("LKR", 144, Some(2), "Sri Lanka Rupee"),
    IsoCurrency::new("MMK", 104, Some(2), "Kyat"),
    IsoCurrency::new("MNT", 496, Some(2), "Tugrik"),
    IsoCurrency::new("MOP", 446, Some(2), "Pataca"),
    IsoCurrency::new("MVR", 462, Some(2), "Rufiyaa"),
    IsoCurrency::new("MYR", 458, Some(2), "Malaysian Ringgit"),
    IsoCurrency::new("NPR", 524, Some(2), "Nepalese Rupee"),
    IsoCurrency::new("OMR", 512, Some(3), "Rial Omani"),
    IsoCurrency::new("PHP", 608, Some(2), "Philippine Peso"),
    IsoCurrency::new("PKR", 586, Some(2), "Pakistan Rupee"),
    IsoCurrency::new("QAR", 634, Some(2), "Qatari Rial"),
    IsoCurrency::new("SAR", 682, Some(2), "Saudi Riyal"),
    IsoCurrency::new("SGD", 702, Some(2), "Singapore Dollar"),
    IsoCurrency::new("SYP", 760, Some(2), "Syrian Pound"),
    IsoCurrency::new("THB", 764, Some(2), "Baht"),
    IsoCurrency::new("TJS", 972, Some(2), "Somoni"),
    IsoCurrency::new("TMT", 934, Some(2), "Turkmenistan New Manat"),
    IsoCurrency::new("TRY", 949, Some(2), "Turkish Lira"),
    IsoCurrency::new("TWD", 901, Some(2), "New Taiwan Dollar"),
    IsoCurrency::new("UZS", 860, Some(2), "Uzbekistan Sum"),
    IsoCurrency::new("VND", 704, Some(0), "Dong"),
    IsoCurrency::new("YER", 886, Some(2), "Yemeni Rial"),
];
