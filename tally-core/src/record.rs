//! Transaction record produced from a single statement line.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::CurrencyCode;
use crate::date::calendar_date;

/// Whether money entered or left the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Incoming,
    Outgoing,
    Unknown,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Incoming => "Incoming",
            Direction::Outgoing => "Outgoing",
            Direction::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed statement line.
///
/// Direction and the sign of `amount` are tied together: the constructor
/// makes incoming amounts non-negative and outgoing amounts non-positive.
/// Deserialization goes through the constructor as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordFields")]
pub struct TransactionRecord {
    date: String,
    description: String,
    amount: Decimal,
    currency: CurrencyCode,
    direction: Direction,
    balance: Decimal,
}

#[derive(Deserialize)]
struct RecordFields {
    date: String,
    description: String,
    amount: Decimal,
    currency: CurrencyCode,
    direction: Direction,
    balance: Decimal,
}

impl From<RecordFields> for TransactionRecord {
    fn from(f: RecordFields) -> Self {
        TransactionRecord::new(f.date, f.description, f.amount, f.currency, f.direction, f.balance)
    }
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        currency: CurrencyCode,
        direction: Direction,
        balance: Decimal,
    ) -> Self {
        let amount = match direction {
            Direction::Incoming => amount.abs(),
            Direction::Outgoing => -amount.abs(),
            Direction::Unknown => amount,
        };
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            currency,
            direction,
            balance,
        }
    }

    /// Date token exactly as it appeared on the line.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Signed amount: positive = incoming, negative = outgoing.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Trailing number on the line, zero when there was none. Heuristic only.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }

    /// Best-effort calendar date for the raw token (see [`calendar_date`]).
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        calendar_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_direction_fixes_sign() {
        let out = TransactionRecord::new(
            "02/03/2024",
            "Rent",
            dec!(900.00),
            CurrencyCode::GBP,
            Direction::Outgoing,
            Decimal::ZERO,
        );
        assert_eq!(out.amount(), dec!(-900.00));
        assert!(out.is_outgoing());

        let inc = TransactionRecord::new(
            "02/03/2024",
            "Refund",
            dec!(-12.50),
            CurrencyCode::GBP,
            Direction::Incoming,
            Decimal::ZERO,
        );
        assert_eq!(inc.amount(), dec!(12.50));
        assert!(inc.is_incoming());
    }

    #[test]
    fn test_unknown_direction_keeps_sign() {
        let r = TransactionRecord::new(
            "1/1/24",
            "Transaction",
            dec!(-3.00),
            CurrencyCode::USD,
            Direction::Unknown,
            Decimal::ZERO,
        );
        assert_eq!(r.amount(), dec!(-3.00));
    }

    #[test]
    fn test_calendar_date() {
        let r = TransactionRecord::new(
            "2024-03-05",
            "Transfer",
            dec!(1),
            CurrencyCode::EUR,
            Direction::Incoming,
            Decimal::ZERO,
        );
        assert_eq!(r.calendar_date(), NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_serialize_shape() {
        let r = TransactionRecord::new(
            "01/03/2024",
            "Salary",
            dec!(5000.00),
            CurrencyCode::AED,
            Direction::Incoming,
            dec!(5000.00),
        );
        let v: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert_eq!(v["currency"], "AED");
        assert_eq!(v["direction"], "Incoming");
        assert_eq!(v["amount"], "5000.00");
    }

    #[test]
    fn test_deserialize_applies_sign_rule() {
        let json = r#"{"date":"02/03/2024","description":"Rent","amount":"5.00",
            "currency":"GBP","direction":"Outgoing","balance":"0"}"#;
        let r: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.amount(), dec!(-5.00));
        assert!(r.is_outgoing());

        let back: TransactionRecord = serde_json::from_value(serde_json::to_value(&r).unwrap()).unwrap();
        assert_eq!(back, r);
    }
}
