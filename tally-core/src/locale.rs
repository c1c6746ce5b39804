//! Coarse caller-supplied locale context, used only when the text itself
//! carries no currency evidence.

use crate::currency::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleHint {
    Mexico,
    Brazil,
    Canada,
    Australia,
    Singapore,
    HongKong,
}

impl LocaleHint {
    pub const ALL: &'static [LocaleHint] = &[
        LocaleHint::Mexico,
        LocaleHint::Brazil,
        LocaleHint::Canada,
        LocaleHint::Australia,
        LocaleHint::Singapore,
        LocaleHint::HongKong,
    ];

    /// Interpret a context string. `"general"` and anything unrecognized
    /// mean "no hint".
    pub fn from_context(context: &str) -> Option<Self> {
        match context.trim().to_ascii_lowercase().as_str() {
            "mexico" => Some(LocaleHint::Mexico),
            "brazil" => Some(LocaleHint::Brazil),
            "canada" => Some(LocaleHint::Canada),
            "australia" => Some(LocaleHint::Australia),
            "singapore" => Some(LocaleHint::Singapore),
            "hong_kong" => Some(LocaleHint::HongKong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleHint::Mexico => "mexico",
            LocaleHint::Brazil => "brazil",
            LocaleHint::Canada => "canada",
            LocaleHint::Australia => "australia",
            LocaleHint::Singapore => "singapore",
            LocaleHint::HongKong => "hong_kong",
        }
    }

    pub fn currency(&self) -> CurrencyCode {
        match self {
            LocaleHint::Mexico => CurrencyCode::MXN,
            LocaleHint::Brazil => CurrencyCode::BRL,
            LocaleHint::Canada => CurrencyCode::CAD,
            LocaleHint::Australia => CurrencyCode::AUD,
            LocaleHint::Singapore => CurrencyCode::SGD,
            LocaleHint::HongKong => CurrencyCode::HKD,
        }
    }
}

impl fmt::Display for LocaleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_context() {
        assert_eq!(LocaleHint::from_context("brazil"), Some(LocaleHint::Brazil));
        assert_eq!(LocaleHint::from_context(" Hong_Kong "), Some(LocaleHint::HongKong));
        assert_eq!(LocaleHint::from_context("general"), None);
        assert_eq!(LocaleHint::from_context("hong kong"), None);
    }

    #[test]
    fn test_every_hint_round_trips_through_its_name() {
        for hint in LocaleHint::ALL {
            assert_eq!(LocaleHint::from_context(hint.as_str()), Some(*hint));
        }
    }

    #[test]
    fn test_hint_currencies() {
        assert_eq!(LocaleHint::Mexico.currency(), CurrencyCode::MXN);
        assert_eq!(LocaleHint::HongKong.currency(), CurrencyCode::HKD);
    }
}
