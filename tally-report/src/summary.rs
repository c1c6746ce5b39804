//! Aggregate statistics over an extracted record list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::{CurrencyCode, Direction, TransactionRecord};

/// Counts and sums for one document. Always recomputed from the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: usize,
    pub incoming_count: usize,
    pub outgoing_count: usize,
    /// Sum of incoming amounts.
    pub total_incoming: Decimal,
    /// Absolute sum of outgoing amounts.
    pub total_outgoing: Decimal,
    /// Signed sum of every amount.
    pub net: Decimal,
    pub currency: CurrencyCode,
}

impl Summary {
    /// Reduce a record list. The currency is taken from the records; the
    /// document currency is only used when the list is empty. Mixed
    /// currencies are not reconciled.
    pub fn from_records(records: &[TransactionRecord], document_currency: CurrencyCode) -> Self {
        let currency = records
            .first()
            .map(|r| r.currency())
            .unwrap_or(document_currency);

        let mut summary = Summary {
            total_count: records.len(),
            incoming_count: 0,
            outgoing_count: 0,
            total_incoming: Decimal::ZERO,
            total_outgoing: Decimal::ZERO,
            net: Decimal::ZERO,
            currency,
        };

        let mut outgoing_sum = Decimal::ZERO;
        for r in records {
            summary.net += r.amount();
            match r.direction() {
                Direction::Incoming => {
                    summary.incoming_count += 1;
                    summary.total_incoming += r.amount();
                }
                Direction::Outgoing => {
                    summary.outgoing_count += 1;
                    outgoing_sum += r.amount();
                }
                Direction::Unknown => {}
            }
        }
        summary.total_outgoing = outgoing_sum.abs();
        summary
    }
}
