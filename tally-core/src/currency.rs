//! Fixed currency catalog.
//!
//! The declaration order below is significant: it is the order in which the
//! detector scans for 3-letter codes, so the first code found in that order
//! wins when a document mentions several.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not one of the catalog's codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

macro_rules! catalog {
    ($( $variant:ident => ($symbol:expr, $name:expr) ),+ $(,)?) => {
        /// A currency from the fixed catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum CurrencyCode {
            $( $variant, )+
        }

        impl CurrencyCode {
            /// Every catalog entry, in scan order.
            pub const ALL: &'static [CurrencyCode] = &[ $( CurrencyCode::$variant, )+ ];

            /// ISO-style 3-letter code, e.g. `"USD"`.
            pub fn code(&self) -> &'static str {
                match self {
                    $( CurrencyCode::$variant => stringify!($variant), )+
                }
            }

            /// Display symbol. Not unique: several currencies share `kr` or `¥`.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $( CurrencyCode::$variant => $symbol, )+
                }
            }

            /// Human-readable name.
            pub fn name(&self) -> &'static str {
                match self {
                    $( CurrencyCode::$variant => $name, )+
                }
            }
        }

        impl FromStr for CurrencyCode {
            type Err = UnknownCurrency;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $( stringify!($variant) => Ok(CurrencyCode::$variant), )+
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// Codes are unique. SAR sits at its first-declared position.
catalog! {
    USD => ("$", "US Dollar"),
    EUR => ("€", "Euro"),
    GBP => ("£", "British Pound"),
    JPY => ("¥", "Japanese Yen"),
    CNY => ("¥", "Chinese Yuan"),
    INR => ("₹", "Indian Rupee"),
    AED => ("د.إ", "UAE Dirham"),
    SAR => ("ر.س", "Saudi Riyal"),
    CHF => ("Fr", "Swiss Franc"),
    CAD => ("C$", "Canadian Dollar"),
    AUD => ("A$", "Australian Dollar"),
    SGD => ("S$", "Singapore Dollar"),
    HKD => ("HK$", "Hong Kong Dollar"),
    NZD => ("NZ$", "New Zealand Dollar"),
    SEK => ("kr", "Swedish Krona"),
    NOK => ("kr", "Norwegian Krone"),
    DKK => ("kr", "Danish Krone"),
    PLN => ("zł", "Polish Zloty"),
    CZK => ("Kč", "Czech Koruna"),
    HUF => ("Ft", "Hungarian Forint"),
    RON => ("lei", "Romanian Leu"),
    BGN => ("лв", "Bulgarian Lev"),
    HRK => ("kn", "Croatian Kuna"),
    RUB => ("₽", "Russian Ruble"),
    TRY => ("₺", "Turkish Lira"),
    ZAR => ("R", "South African Rand"),
    BRL => ("R$", "Brazilian Real"),
    MXN => ("Mex$", "Mexican Peso"),
    ARS => ("AR$", "Argentine Peso"),
    CLP => ("CLP$", "Chilean Peso"),
    COP => ("COL$", "Colombian Peso"),
    PEN => ("S/", "Peruvian Sol"),
    KRW => ("₩", "South Korean Won"),
    THB => ("฿", "Thai Baht"),
    MYR => ("RM", "Malaysian Ringgit"),
    IDR => ("Rp", "Indonesian Rupiah"),
    PHP => ("₱", "Philippine Peso"),
    VND => ("₫", "Vietnamese Dong"),
    EGP => ("E£", "Egyptian Pound"),
    NGN => ("₦", "Nigerian Naira"),
    KES => ("KSh", "Kenyan Shilling"),
    MAD => ("DH", "Moroccan Dirham"),
    TND => ("د.ت", "Tunisian Dinar"),
    ILS => ("₪", "Israeli Shekel"),
    QAR => ("ر.ق", "Qatari Riyal"),
    KWD => ("د.ك", "Kuwaiti Dinar"),
    BHD => (".د.ب", "Bahraini Dinar"),
    OMR => ("ر.ع.", "Omani Rial"),
    PKR => ("₨", "Pakistani Rupee"),
    LKR => ("Rs", "Sri Lankan Rupee"),
    BDT => ("৳", "Bangladeshi Taka"),
    IQD => ("ع.د", "Iraqi Dinar"),
    IRR => ("﷼", "Iranian Rial"),
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::USD
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
