//! Currency detection over a whole document.
//!
//! The cascade is an ordered table of stages; the first stage that finds
//! evidence decides. Stage 1 compares against the upper-cased text, every
//! other stage is case-sensitive.

use tally_core::{CurrencyCode, LocaleHint};
use tracing::debug;

/// What decided the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// A catalog code appeared in the text (case-insensitive).
    Code,
    Symbol(&'static str),
    Region(&'static str),
    Bank(&'static str),
    Hint(LocaleHint),
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub currency: CurrencyCode,
    pub evidence: Evidence,
}

// `¥` is shared by JPY and CNY; it resolves to JPY.
const SYMBOLS: &[(&str, CurrencyCode)] = &[
    ("$", CurrencyCode::USD),
    ("€", CurrencyCode::EUR),
    ("£", CurrencyCode::GBP),
    ("₹", CurrencyCode::INR),
    ("¥", CurrencyCode::JPY),
    ("د.إ", CurrencyCode::AED),
    ("Fr", CurrencyCode::CHF),
];

const REGIONS: &[(&str, CurrencyCode)] = &[
    ("Mumbai", CurrencyCode::INR),
    ("Delhi", CurrencyCode::INR),
    ("India", CurrencyCode::INR),
    ("Bangalore", CurrencyCode::INR),
    ("Dubai", CurrencyCode::AED),
    ("Abu Dhabi", CurrencyCode::AED),
    ("UAE", CurrencyCode::AED),
    ("Emirates", CurrencyCode::AED),
    ("London", CurrencyCode::GBP),
    ("UK", CurrencyCode::GBP),
    ("Britain", CurrencyCode::GBP),
    ("Manchester", CurrencyCode::GBP),
    ("Berlin", CurrencyCode::EUR),
    ("Paris", CurrencyCode::EUR),
    ("Rome", CurrencyCode::EUR),
    ("Europe", CurrencyCode::EUR),
    ("Tokyo", CurrencyCode::JPY),
    ("Osaka", CurrencyCode::JPY),
    ("Japan", CurrencyCode::JPY),
    ("Beijing", CurrencyCode::CNY),
    ("Shanghai", CurrencyCode::CNY),
    ("China", CurrencyCode::CNY),
];

const BANKS: &[(&str, CurrencyCode)] = &[
    ("HDFC", CurrencyCode::INR),
    ("ICICI", CurrencyCode::INR),
    ("SBI", CurrencyCode::INR),
    ("AXIS", CurrencyCode::INR),
    ("Emirates NBD", CurrencyCode::AED),
    ("FAB", CurrencyCode::AED),
    ("ADCB", CurrencyCode::AED),
    ("HSBC", CurrencyCode::USD),
    ("Citibank", CurrencyCode::USD),
    ("Chase", CurrencyCode::USD),
    ("Deutsche Bank", CurrencyCode::EUR),
    ("BNP Paribas", CurrencyCode::EUR),
];

struct Sample<'a> {
    text: &'a str,
    upper: String,
    hint: Option<LocaleHint>,
}

type Stage = fn(&Sample<'_>) -> Option<Detection>;

/// Cascade order. First `Some` wins.
const CASCADE: &[Stage] = &[by_code, by_symbol, by_region, by_bank, by_hint];

fn by_code(s: &Sample<'_>) -> Option<Detection> {
    CurrencyCode::ALL
        .iter()
        .find(|c| s.upper.contains(c.code()))
        .map(|&currency| Detection {
            currency,
            evidence: Evidence::Code,
        })
}

fn first_needle(text: &str, table: &[(&'static str, CurrencyCode)]) -> Option<(&'static str, CurrencyCode)> {
    table.iter().copied().find(|(needle, _)| text.contains(needle))
}

fn by_symbol(s: &Sample<'_>) -> Option<Detection> {
    first_needle(s.text, SYMBOLS).map(|(sym, currency)| Detection {
        currency,
        evidence: Evidence::Symbol(sym),
    })
}

fn by_region(s: &Sample<'_>) -> Option<Detection> {
    first_needle(s.text, REGIONS).map(|(region, currency)| Detection {
        currency,
        evidence: Evidence::Region(region),
    })
}

fn by_bank(s: &Sample<'_>) -> Option<Detection> {
    first_needle(s.text, BANKS).map(|(bank, currency)| Detection {
        currency,
        evidence: Evidence::Bank(bank),
    })
}

fn by_hint(s: &Sample<'_>) -> Option<Detection> {
    s.hint.map(|hint| Detection {
        currency: hint.currency(),
        evidence: Evidence::Hint(hint),
    })
}

/// Run the cascade and report which stage decided.
pub fn detect_with_evidence(text: &str, hint: Option<LocaleHint>) -> Detection {
    let sample = Sample {
        text,
        upper: text.to_uppercase(),
        hint,
    };

    let detection = CASCADE
        .iter()
        .find_map(|stage| stage(&sample))
        .unwrap_or(Detection {
            currency: CurrencyCode::USD,
            evidence: Evidence::Default,
        });

    debug!(
        currency = %detection.currency,
        evidence = ?detection.evidence,
        "detected document currency"
    );
    detection
}

/// Detect the document currency. Never fails; falls back to USD.
pub fn detect(text: &str, hint: Option<LocaleHint>) -> CurrencyCode {
    detect_with_evidence(text, hint).currency
}
