//! Best-effort conversion of raw statement date tokens to calendar dates.
//!
//! Parsed records keep the token verbatim; this is only used for ordering and
//! grouping in reports.

use chrono::NaiveDate;

/// Convert a token such as `01/03/2024`, `1-3-24` or `2024/03/01`.
///
/// A four-digit leading field is read as year-month-day. Otherwise the token
/// is read month-first, then day-first if month-first is not a valid date.
/// Separators `/` and `-` are interchangeable, even when mixed.
pub fn calendar_date(token: &str) -> Option<NaiveDate> {
    let normalized = token.trim().replace('-', "/");
    let fields: Vec<&str> = normalized.split('/').collect();
    if fields.len() != 3 || fields.iter().any(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let formats: &[&str] = match (fields[0].len(), fields[2].len()) {
        (4, _) => &["%Y/%m/%d"],
        (_, 4) => &["%m/%d/%Y", "%d/%m/%Y"],
        (_, 2) => &["%m/%d/%y", "%d/%m/%y"],
        _ => return None,
    };

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_first_when_ambiguous() {
        assert_eq!(calendar_date("01/03/2024"), Some(ymd(2024, 1, 3)));
    }

    #[test]
    fn test_day_first_fallback() {
        assert_eq!(calendar_date("25/03/2024"), Some(ymd(2024, 3, 25)));
    }

    #[test]
    fn test_year_first_and_dashes() {
        assert_eq!(calendar_date("2024-03-01"), Some(ymd(2024, 3, 1)));
        assert_eq!(calendar_date("2024/3/1"), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(calendar_date("3/1/24"), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(calendar_date("31/31/2024"), None);
        assert_eq!(calendar_date("not a date"), None);
        assert_eq!(calendar_date("1/2/345"), None);
        assert_eq!(calendar_date(""), None);
    }
}
