//! tally-ingest: currency detection and heuristic transaction extraction from statement text.

pub mod currency_detect;
pub mod document;
pub mod fault;
pub mod line_parser;

pub use currency_detect::{detect, detect_with_evidence, Detection, Evidence};
pub use document::{extract_transactions, extract_with, parse_line, Extraction};
pub use fault::LineFault;
pub use line_parser::{LineOutcome, LineParser};
