//! Withdrawn ISO 4217 codes.
//!
//! These codes are only resolved when a lookup explicitly asks for
//! withdrawn currencies, and always report the unknown-minor-units
//! sentinel.

/// `(code, name)` pairs of currencies removed from the active list.
pub static WITHDRAWN: &[(&str, &str)] = &[
    ("ADP", "Andorran Peseta"),
    ("AFA", "Afghani"),
    ("ANG", "Netherlands Antillean Guilder"),
    ("AON", "New Kwanza"),
    ("AOR", "Kwanza Reajustado"),
    ("ARA", "Austral"),
    ("ARP", "Peso Argentino"),
    ("ATS", "Schilling"),
    ("AZM", "Azerbaijanian Manat"),
    ("BEF", "Belgian Franc"),
    ("BGL", "Lev"),
    ("BYB", "Belarusian Ruble"),
    ("BYR", "Belarusian Ruble"),
    ("CSD", "Serbian Dinar"),
    ("CSK", "Koruna"),
    ("CUC", "Peso Convertible"),
    ("CYP", "Cyprus Pound"),
    ("DEM", "Deutsche Mark"),
    ("EEK", "Kroon"),
    ("ESP", "Spanish Peseta"),
    ("FIM", "Markka"),
    ("FRF", "French Franc"),
    ("GHC", "Cedi"),
    ("GRD", "Drachma"),
    ("HRK", "Kuna"),
    ("IEP", "Irish Pound"),
    ("ITL", "Italian Lira"),
    ("LTL", "Lithuanian Litas"),
    ("LUF", "Luxembourg Franc"),
    ("LVL", "Latvian Lats"),
    ("MGF", "Malagasy Franc"),
    ("MRO", "Ouguiya"),
    ("MTL", "Maltese Lira"),
    ("MZM", "Mozambique Metical"),
    ("NLG", "Netherlands Guilder"),
    ("PTE", "Portuguese Escudo"),
    ("ROL", "Old Leu"),
    ("RUR", "Russian Ruble"),
    ("SDD", "Sudanese Dinar"),
    ("SIT", "Tolar"),
    ("SKK", "Slovak Koruna"),
    ("SLL", "Leone"),
    ("SRG", "Surinam Guilder"),
    ("STD", "Dobra"),
    ("SUR", "Rouble"),
    ("TMM", "Turkmenistan Manat"),
    ("TRL", "Old Turkish Lira"),
    ("VEB", "Bolivar"),
    ("VEF", "Bolivar"),
    ("XEU", "European Currency Unit (E.C.U)"),
    ("XFO", "Gold-Franc"),
    ("XFU", "UIC-Franc"),
    ("YUM", "New Dinar"),
    ("ZMK", "Zambian Kwacha"),
    ("ZWD", "Zimbabwe Dollar"),
    ("ZWL", "Zimbabwe Dollar"),
    ("ZWR", "Zimbabwe Dollar"),
];
