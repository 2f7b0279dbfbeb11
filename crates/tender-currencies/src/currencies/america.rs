//! Currencies of the Americas and the Caribbean.

use super::IsoCurrency;

/// Active ISO 4217 codes circulating in North, Central and South America.
pub static AMERICA: &[IsoCurrency] = &[
    IsoCurrency::new("ARS", 32, Some(2), "Argentine Peso"),
    IsoCurrency::new("AWG", 533, Some(2), "Aruban Florin"),
    IsoCurrency::new("BBD", 52, Some(2), "Barbados Dollar"),
    IsoCurrency::new("BMD", 60, Some(2), "Bermudian Dollar"),
    IsoCurrency::new("BOB", 68, Some(2), "Boliviano"),
    IsoCurrency::new("BOV", 984, Some(2), "Mvdol"),
    IsoCurrency::new("BRL", 986, Some(2), "Brazilian Real"),
    IsoCurrency::new("BSD", 44, Some(2), "Bahamian Dollar"),
    IsoCurrency::new("BZD", 84, Some(2), "Belize Dollar"),
    IsoCurrency::new("CAD", 124, Some(2), "Canadian Dollar"),
    IsoCurrency::new("CLF", 990, Some(4), "Unidad de Fomento"),
    IsoCurrency::new("CLP", 152, Some(0), "Chilean Peso"),
    IsoCurrency::new("COP", 170, Some(2), "Colombian Peso"),
    IsoCurrency::new("COU", 970, Some(2), "Unidad de Valor Real"),
    IsoCurrency::new("CRC", 188, Some(2), "Costa Rican Colon"),
    IsoCurrency::new("CUP", 192, Some(2), "Cuban Peso"),
    IsoCurrency::new("DOP", 214, Some(2), "Dominican Peso"),
    IsoCurrency::new("FKP", 238, Some(2), "Falkland Islands Pound"),
    IsoCurrency::new("GTQ", 320, Some(2), "Quetzal"),
    IsoCurrency::new("GYD", 328, Some(2), "Guyana Dollar"),
    IsoCurrency::new("HNL", 340, Some(2), "Lempira"),
    IsoCurrency::new("HTG", 332, Some(2), "Gourde"),
    IsoCurrency::new("JMD", 388, Some(2), "Jamaican Dollar"),
    IsoCurrency::new("KYD", 136, Some(2), "Cayman Islands Dollar"),
    IsoCurrency::new("MXN", 484, Some(2), "Mexican Peso"),
    IsoCurrency::new("MXV", 979, Some(2), "Mexican Unidad de Inversion (UDI)"),
    IsoCurrency::new("NIO", 558, Some(2), "Cordoba Oro"),
    IsoCurrency::new("PAB", 590, Some(2), "Balboa"),
    IsoCurrency::new("PEN", 604, Some(2), "Sol"),
    IsoCurrency::new("PYG", 600, Some(0), "Guarani"),
    IsoCurrency::new("SRD", 968, Some(2), "Surinam Dollar"),
    IsoCurrency::new("SVC", 222, Some(2), "El Salvador Colon"),
    IsoCurrency::new("TTD", 780, Some(2), "Trinidad and Tobago Dollar"),
    IsoCurrency::new("USD", 840, Some(2), "US Dollar"),
    IsoCurrency::new("USN", 997, Some(2), "US Dollar (Next day)"),
    IsoCurrency::new("UYI", 940, Some(0), "Uruguay Peso en Unidades Indexadas (UI)"),
    IsoCurrency::new("UYU", 858, Some(2), "Peso Uruguayo"),
    IsoCurrency::new("UYW", 927, Some(4), "Unidad Previsional"),
    IsoCurrency::new("VED", 926, Some(2), "Bolivar Soberano"),
    IsoCurrency::new("VES", 928, Some(2), "Bolivar Soberano"),
    IsoCurrency::new("XCD", 951, Some(2), "East Caribbean Dollar"),
    IsoCurrency::new("XCG", 532, Some(2), "Caribbean Guilder"),
];
