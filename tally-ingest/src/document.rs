//! Document-level extraction: one currency for the whole text, then every
//! line offered to the line parser.

use anyhow::{anyhow, Result};
use std::sync::LazyLock;
use tally_core::{CurrencyCode, LocaleHint, TransactionRecord};
use tracing::{debug, trace};

use crate::currency_detect::{detect_with_evidence, Detection};
use crate::line_parser::{LineOutcome, LineParser};

static SHARED_PARSER: LazyLock<Result<LineParser>> = LazyLock::new(LineParser::new);

fn shared_parser() -> Result<&'static LineParser> {
    (*SHARED_PARSER)
        .as_ref()
        .map_err(|e| anyhow!("line parser unavailable: {e:#}"))
}

/// Parse one line with the process-wide pattern set.
///
/// Returns `None` for lines without a transaction, including when the
/// pattern set itself could not be built.
pub fn parse_line(line: &str, currency: CurrencyCode) -> Option<TransactionRecord> {
    shared_parser().ok()?.parse_line(line, currency)
}

/// Result of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Parsed records in original line order.
    pub records: Vec<TransactionRecord>,
    pub detection: Detection,
    /// Number of lines offered to the parser.
    pub lines_scanned: usize,
}

impl Extraction {
    pub fn currency(&self) -> CurrencyCode {
        self.detection.currency
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extract records from already-extracted statement text.
pub fn extract_with(parser: &LineParser, text: &str, hint: Option<LocaleHint>) -> Extraction {
    let detection = detect_with_evidence(text, hint);
    let currency = detection.currency;

    let mut records = Vec::new();
    let mut lines_scanned = 0;

    for (idx, line) in text.lines().enumerate() {
        lines_scanned += 1;
        let line = line.trim();
        match parser.parse(line, currency) {
            LineOutcome::Parsed(record) => records.push(record),
            LineOutcome::Skipped(fault) => {
                trace!(line = idx + 1, %fault, "skipped line");
            }
        }
    }

    debug!(
        lines = lines_scanned,
        records = records.len(),
        %currency,
        "extraction finished"
    );

    Extraction {
        records,
        detection,
        lines_scanned,
    }
}

/// Extract records using the process-wide pattern set.
///
/// Content never makes this fail; an error means the fixed pattern set
/// could not be compiled.
pub fn extract_transactions(text: &str, hint: Option<LocaleHint>) -> Result<Extraction> {
    Ok(extract_with(shared_parser()?, text, hint))
}
