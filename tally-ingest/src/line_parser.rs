//! Heuristic single-line transaction parser.
//!
//! Expected input: one line of text extracted from a statement, e.g.
//!   01/03/2024   Salary Deposit FROM Employer     5,000.00     12,500.00
//!
//! A line is a transaction when it carries a date-shaped token and at least
//! one plausible amount. The largest plausible number wins as the amount,
//! which picks the running balance over the transaction amount when the
//! balance is larger. Downstream output depends on that, so keep it.

use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tally_core::{CurrencyCode, Direction, TransactionRecord};

use crate::fault::LineFault;

/// Fallback description when the line is mostly date and numbers.
pub const PLACEHOLDER_DESCRIPTION: &str = "Transaction";
/// Descriptions are cut to this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

const MIN_PLAUSIBLE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const MAX_PLAUSIBLE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

// ASCII digits only; `Decimal` reads no other script.
const GATE_PATTERN: &str = r"[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}";

// Priority order: D/M/YYYY, D/M/YY, YYYY/M/D.
const DATE_PATTERNS: [&str; 3] = [
    r"[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{4}",
    r"[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2}",
    r"[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2}",
];

const AMOUNT_PATTERNS: [&str; 3] = [
    r"[-+]?[0-9]{1,3}(?:[,\s][0-9]{3})*(?:\.[0-9]{2})?",
    r"[-+]?[0-9]{1,3}(?:[,\s][0-9]{3})*(?:,[0-9]{2})?",
    r"[-+]?[0-9]+(?:\.[0-9]{2})?",
];

const BALANCE_PATTERN: &str = r"([0-9]{1,3}(?:[,\s][0-9]{3})*(?:\.[0-9]{2})?)\s*$";

/// Whether an absolute amount lies inside `[0.01, 100_000_000]`.
pub fn is_plausible_amount(value: Decimal) -> bool {
    let abs = value.abs();
    abs >= MIN_PLAUSIBLE && abs <= MAX_PLAUSIBLE
}

/// Strip `,` and space grouping, then read as a decimal.
pub fn parse_number(raw: &str) -> Result<Decimal, LineFault> {
    let cleaned = raw.replace([',', ' '], "");
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    Decimal::from_str(cleaned).map_err(|_| LineFault::MalformedNumber(raw.to_string()))
}

/// What pushes a line towards a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Any of these appears anywhere in the upper-cased line.
    Contains(&'static [&'static str]),
    /// Any of these is a whole word of the upper-cased line.
    Word(&'static [&'static str]),
    /// A numeric candidate was written with a minus sign.
    MinusSign,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRule {
    pub cue: Cue,
    pub direction: Direction,
}

/// First matching rule decides. The record constructor then forces the
/// amount's sign to agree with the direction.
///
/// `TO` alone needs a word boundary: as a substring it hides in STORE,
/// TOTAL and TOWN.
pub const DIRECTION_RULES: &[DirectionRule] = &[
    DirectionRule {
        cue: Cue::Contains(&["FROM", "INWARD", "CREDIT", "RECEIVED"]),
        direction: Direction::Incoming,
    },
    DirectionRule {
        cue: Cue::Contains(&["OUTWARD", "DEBIT", "PAID", "TRANSFER"]),
        direction: Direction::Outgoing,
    },
    DirectionRule {
        cue: Cue::Word(&["TO"]),
        direction: Direction::Outgoing,
    },
    DirectionRule {
        cue: Cue::MinusSign,
        direction: Direction::Outgoing,
    },
    DirectionRule {
        cue: Cue::Always,
        direction: Direction::Incoming,
    },
];

/// Evaluate [`DIRECTION_RULES`] against a line and its raw numeric tokens.
pub fn infer_direction(line: &str, raw_amounts: &[&str]) -> Direction {
    let upper = line.to_uppercase();
    let fires = |cue: &Cue| match cue {
        Cue::Contains(keywords) => keywords.iter().any(|k| upper.contains(k)),
        Cue::Word(keywords) => upper
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| keywords.contains(&w)),
        Cue::MinusSign => raw_amounts.iter().any(|raw| raw.contains('-')),
        Cue::Always => true,
    };

    DIRECTION_RULES
        .iter()
        .find(|rule| fires(&rule.cue))
        .map(|rule| rule.direction)
        .unwrap_or(Direction::Unknown)
}

/// Outcome of offering one line to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(TransactionRecord),
    Skipped(LineFault),
}

impl LineOutcome {
    pub fn into_record(self) -> Option<TransactionRecord> {
        match self {
            LineOutcome::Parsed(record) => Some(record),
            LineOutcome::Skipped(_) => None,
        }
    }
}

/// Compiled pattern set. Build once, reuse for every line.
#[derive(Debug, Clone)]
pub struct LineParser {
    gate: Regex,
    dates: Vec<Regex>,
    amounts: Vec<Regex>,
    balance: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        let compile = |p: &str| Regex::new(p).with_context(|| format!("compiling pattern {p}"));
        Ok(Self {
            gate: compile(GATE_PATTERN)?,
            dates: DATE_PATTERNS.iter().map(|p| compile(*p)).collect::<Result<_>>()?,
            amounts: AMOUNT_PATTERNS.iter().map(|p| compile(*p)).collect::<Result<_>>()?,
            balance: compile(BALANCE_PATTERN)?,
        })
    }

    /// Cheap pre-check: does the line carry a date-shaped token at all?
    pub fn has_date_token(&self, line: &str) -> bool {
        self.gate.is_match(line)
    }

    /// Parse a line, or return `None` when it holds no transaction.
    pub fn parse_line(&self, line: &str, currency: CurrencyCode) -> Option<TransactionRecord> {
        self.parse(line, currency).into_record()
    }

    /// Parse a line, reporting why it was skipped.
    pub fn parse(&self, line: &str, currency: CurrencyCode) -> LineOutcome {
        match self.try_parse(line, currency) {
            Ok(record) => LineOutcome::Parsed(record),
            Err(fault) => LineOutcome::Skipped(fault),
        }
    }

    fn try_parse(&self, line: &str, currency: CurrencyCode) -> Result<TransactionRecord, LineFault> {
        if !self.has_date_token(line) {
            return Err(LineFault::NoDateToken);
        }

        let date = self
            .dates
            .iter()
            .find_map(|re| re.find(line))
            .ok_or(LineFault::NoDateMatch)?;

        // Amount candidates come from the line with the date token blanked
        // out, so date fields never compete as amounts.
        let without_date = format!("{} {}", &line[..date.start()], &line[date.end()..]);
        let raw_amounts: Vec<&str> = self
            .amounts
            .iter()
            .flat_map(|re| re.find_iter(&without_date).map(|m| m.as_str()))
            .collect();

        let mut amount = raw_amounts
            .iter()
            .filter_map(|raw| parse_number(raw).ok())
            .filter(|v| is_plausible_amount(*v))
            .max()
            .ok_or(LineFault::NoPlausibleAmount)?;
        amount.rescale(2);

        let direction = infer_direction(line, &raw_amounts);
        let description = self.description(line);

        let mut balance = match self.balance.captures(line) {
            Some(caps) => parse_number(&caps[1])?,
            None => Decimal::ZERO,
        };
        balance.rescale(2);

        Ok(TransactionRecord::new(
            date.as_str(),
            description,
            amount,
            currency,
            direction,
            balance,
        ))
    }

    /// Line minus every D/M/YYYY date and every amount-shaped token.
    fn description(&self, line: &str) -> String {
        let mut text = self.dates[0].replace_all(line, "").into_owned();
        for re in &self.amounts {
            text = re.replace_all(&text, "").into_owned();
        }

        let text = text.trim();
        let text = if text.chars().count() < 3 {
            PLACEHOLDER_DESCRIPTION
        } else {
            text
        };
        text.chars().take(MAX_DESCRIPTION_CHARS).collect()
    }
}
