//! Human-facing amount rendering.

use rust_decimal::Decimal;
use tally_core::CurrencyCode;

/// `1234567.5` -> `1,234,567.50`. Sign is not included.
fn grouped(abs: Decimal) -> String {
    let fixed = format!("{:.2}", abs.round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Positive amounts get an explicit `+`: `+5,000.00 AED`, `-150.50 AED`.
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let sign = if amount > Decimal::ZERO {
        "+"
    } else if amount < Decimal::ZERO {
        "-"
    } else {
        ""
    };
    format!("{sign}{} {}", grouped(amount.abs()), currency.code())
}

/// Plain grouped number with a leading `-` for negatives: `-1,234.00`.
pub fn format_number(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-{}", grouped(amount.abs()))
    } else {
        grouped(amount)
    }
}
