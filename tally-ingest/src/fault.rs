//! Reasons a line contributes nothing to the output.
//!
//! None of these are fatal: the document driver logs them and moves on to
//! the next line.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineFault {
    /// The line has no date-shaped token at all.
    #[error("no date-shaped token")]
    NoDateToken,

    /// The gate matched but none of the extraction date patterns did.
    #[error("date gate matched but no date pattern did")]
    NoDateMatch,

    /// Every numeric candidate was unparseable or outside the plausibility window.
    #[error("no plausible amount")]
    NoPlausibleAmount,

    /// A captured numeric token that the line depends on could not be read as a decimal.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
}
