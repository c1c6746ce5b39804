//! CSV export of records and the summary row.
//!
//! Transactions file columns:
//!   Date,Description,Amount,Currency,Type,Balance

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use std::path::Path;
use tally_core::{CurrencyCode, Direction, TransactionRecord};

use crate::summary::Summary;

#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: Decimal,
    #[serde(rename = "Currency")]
    currency: CurrencyCode,
    #[serde(rename = "Type")]
    direction: Direction,
    #[serde(rename = "Balance")]
    balance: Decimal,
}

impl<'a> From<&'a TransactionRecord> for TransactionRow<'a> {
    fn from(r: &'a TransactionRecord) -> Self {
        Self {
            date: r.date(),
            description: r.description(),
            amount: r.amount(),
            currency: r.currency(),
            direction: r.direction(),
            balance: r.balance(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Total Transactions")]
    total: usize,
    #[serde(rename = "Incoming Transactions")]
    incoming: usize,
    #[serde(rename = "Outgoing Transactions")]
    outgoing: usize,
    #[serde(rename = "Total Incoming Amount")]
    total_incoming: Decimal,
    #[serde(rename = "Total Outgoing Amount")]
    total_outgoing: Decimal,
    #[serde(rename = "Net Amount")]
    net: Decimal,
    #[serde(rename = "Currency")]
    currency: CurrencyCode,
}

impl From<&Summary> for SummaryRow {
    fn from(s: &Summary) -> Self {
        Self {
            total: s.total_count,
            incoming: s.incoming_count,
            outgoing: s.outgoing_count,
            total_incoming: s.total_incoming,
            total_outgoing: s.total_outgoing,
            net: s.net,
            currency: s.currency,
        }
    }
}

/// Write records, with a header row, to any writer.
pub fn write_transactions<W: io::Write>(records: &[TransactionRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(TransactionRow::from(r))?;
    }
    // serialize() only emits headers alongside the first row.
    if records.is_empty() {
        wtr.write_record(["Date", "Description", "Amount", "Currency", "Type", "Balance"])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the one-row summary table to any writer.
pub fn write_summary<W: io::Write>(summary: &Summary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.serialize(SummaryRow::from(summary))?;
    wtr.flush()?;
    Ok(())
}

pub fn export_transactions(records: &[TransactionRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_transactions(records, file).with_context(|| format!("write {}", path.display()))
}

pub fn export_summary(summary: &Summary, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_summary(summary, file).with_context(|| format!("write {}", path.display()))
}
