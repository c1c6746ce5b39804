//! Date-based views over records: re-sorting and per-day / per-month totals.
//!
//! All of these go through the best-effort calendar date of each record;
//! records whose token is not a valid date sort last and are left out of
//! the monthly view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tally_core::{Direction, TransactionRecord};

/// Stable re-sort by calendar date. Undated records keep their relative
/// order after every dated one.
pub fn sort_by_date(records: &mut [TransactionRecord]) {
    records.sort_by_key(|r| {
        let date = r.calendar_date();
        (date.is_none(), date)
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    /// Raw date token shared by the grouped records.
    pub date: String,
    pub calendar_date: Option<NaiveDate>,
    /// Signed sum of the day's amounts.
    pub net: Decimal,
}

/// Signed sum per raw date token, in calendar order.
pub fn daily_totals(records: &[TransactionRecord]) -> Vec<DailyTotal> {
    let mut by_token: BTreeMap<&str, Decimal> = BTreeMap::new();
    for r in records {
        *by_token.entry(r.date()).or_insert(Decimal::ZERO) += r.amount();
    }

    let mut out: Vec<DailyTotal> = by_token
        .into_iter()
        .map(|(token, net)| DailyTotal {
            date: token.to_string(),
            calendar_date: tally_core::calendar_date(token),
            net,
        })
        .collect();
    out.sort_by_key(|d| (d.calendar_date.is_none(), d.calendar_date));
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    /// Signed sum of incoming amounts.
    pub incoming: Decimal,
    /// Signed sum of outgoing amounts (zero or negative).
    pub outgoing: Decimal,
}

/// Incoming and outgoing sums per calendar month, oldest first.
pub fn monthly_totals(records: &[TransactionRecord]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for r in records {
        let Some(date) = r.calendar_date() else {
            continue;
        };
        let entry = by_month
            .entry(date.format("%Y-%m").to_string())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match r.direction() {
            Direction::Incoming => entry.0 += r.amount(),
            Direction::Outgoing => entry.1 += r.amount(),
            Direction::Unknown => {}
        }
    }

    by_month
        .into_iter()
        .map(|(month, (incoming, outgoing))| MonthlyTotal {
            month,
            incoming,
            outgoing,
        })
        .collect()
}

/// Daily and monthly views of one record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub daily: Vec<DailyTotal>,
    pub monthly: Vec<MonthlyTotal>,
}

impl Breakdown {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        Self {
            daily: daily_totals(records),
            monthly: monthly_totals(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_core::CurrencyCode;

    fn rec(date: &str, amount: Decimal, direction: Direction) -> TransactionRecord {
        TransactionRecord::new(date, "x", amount, CurrencyCode::USD, direction, Decimal::ZERO)
    }

    #[test]
    fn test_sort_by_date_is_stable_and_puts_undated_last() {
        let mut records = vec![
            rec("99/99/2024", dec!(1), Direction::Incoming),
            rec("2024-03-05", dec!(2), Direction::Incoming),
            rec("03/01/2024", dec!(3), Direction::Incoming),
            rec("88/88/2024", dec!(4), Direction::Incoming),
            rec("2024/03/01", dec!(5), Direction::Incoming),
        ];
        sort_by_date(&mut records);
        let amounts: Vec<_> = records.iter().map(|r| r.amount()).collect();
        assert_eq!(amounts, vec![dec!(3), dec!(5), dec!(2), dec!(1), dec!(4)]);
    }

    #[test]
    fn test_daily_totals_group_by_token() {
        let records = vec![
            rec("03/02/2024", dec!(100), Direction::Incoming),
            rec("03/01/2024", dec!(20), Direction::Outgoing),
            rec("03/02/2024", dec!(30), Direction::Outgoing),
        ];
        let days = daily_totals(&records);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "03/01/2024");
        assert_eq!(days[0].net, dec!(-20));
        assert_eq!(days[1].date, "03/02/2024");
        assert_eq!(days[1].net, dec!(70));
    }

    #[test]
    fn test_monthly_totals() {
        let records = vec![
            rec("2024-03-01", dec!(5000), Direction::Incoming),
            rec("2024-03-02", dec!(150.50), Direction::Outgoing),
            rec("2024-04-02", dec!(10), Direction::Outgoing),
            rec("bogus/1/2024", dec!(1), Direction::Incoming),
        ];
        let months = monthly_totals(&records);
        assert_eq!(
            months,
            vec![
                MonthlyTotal {
                    month: "2024-03".into(),
                    incoming: dec!(5000),
                    outgoing: dec!(-150.50),
                },
                MonthlyTotal {
                    month: "2024-04".into(),
                    incoming: Decimal::ZERO,
                    outgoing: dec!(-10),
                },
            ]
        );
    }

    #[test]
    fn test_breakdown_collects_both_views() {
        let records = vec![
            rec("2024-03-01", dec!(40), Direction::Incoming),
            rec("2024-03-01", dec!(15), Direction::Outgoing),
        ];
        let b = Breakdown::from_records(&records);
        assert_eq!(b.daily.len(), 1);
        assert_eq!(b.daily[0].net, dec!(25));
        assert_eq!(b.monthly[0].incoming, dec!(40));
        assert_eq!(b.monthly[0].outgoing, dec!(-15));
        assert!(Breakdown::from_records(&[]).daily.is_empty());
    }
}
