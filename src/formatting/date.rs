use chrono::{Datelike, NaiveDate};
use thiserror::Error;

const LONG_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("expected a M/D/YYYY date, got {0:?}")]
    InvalidDateFormat(String),
    #[error("{0:?} is not a calendar date")]
    InvalidDate(String),
}

/// Parse a slash-delimited `M/D/YYYY` (or `MM/DD/YYYY`) date
pub fn parse_slash_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let [month, day, year] = split_components(raw)?;

    // Month is 1-based in the input and in chrono alike
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or_else(|| DateFormatError::InvalidDate(raw.to_string()))
}

/// Reformat `M/D/YYYY` as e.g. "June 15, 2024"
pub fn normalize(raw: &str) -> Result<String, DateFormatError> {
    parse_slash_date(raw).map(|date| date.format(LONG_FORMAT).to_string())
}

/// Numeric stamp without leading zeros, the inverse of [`parse_slash_date`]
pub fn format_numeric(date: NaiveDate) -> String {
    format!("{}/{}/{:04}", date.month(), date.day(), date.year())
}

/// Month and day take one or two digits, the year exactly four
const TOKEN_WIDTHS: [(usize, usize); 3] = [(1, 2), (1, 2), (4, 4)];

fn split_components(raw: &str) -> Result<[i32; 3], DateFormatError> {
    let invalid = || DateFormatError::InvalidDateFormat(raw.to_string());

    let tokens: Vec<&str> = raw.trim().split('/').map(str::trim).collect();
    if tokens.len() != 3 {
        return Err(invalid());
    }

    let mut parts = [0i32; 3];
    for ((slot, token), (min, max)) in parts.iter_mut().zip(&tokens).zip(TOKEN_WIDTHS) {
        if !(min..=max).contains(&token.len()) || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = token.parse().map_err(|_| invalid())?;
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_long_form() {
        assert_eq!(normalize("6/15/2024").unwrap(), "June 15, 2024");
        assert_eq!(normalize("12/1/2023").unwrap(), "December 1, 2023");
        assert_eq!(normalize("01/05/2025").unwrap(), "January 5, 2025");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(normalize(" 3/9/2024 ").unwrap(), "March 9, 2024");
    }

    #[test]
    fn test_malformed_input() {
        for raw in ["", "2024-06-15", "6/15", "6/15/2024/1", "June/15/2024", "6//2024", "-6/15/2024"] {
            assert_eq!(
                normalize(raw),
                Err(DateFormatError::InvalidDateFormat(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_year_must_have_four_digits() {
        for raw in ["1/1/24", "1/1/024", "1/1/4294967295", "1/1/20245", "001/1/2024", "1/123/2024"] {
            assert_eq!(
                normalize(raw),
                Err(DateFormatError::InvalidDateFormat(raw.to_string())),
                "input {raw:?}"
            );
        }
        assert_eq!(normalize("1/1/0024").unwrap(), "January 1, 0024");
    }

    #[test]
    fn test_impossible_dates_do_not_roll_over() {
        assert!(matches!(normalize("2/30/2024"), Err(DateFormatError::InvalidDate(_))));
        assert!(matches!(normalize("13/1/2024"), Err(DateFormatError::InvalidDate(_))));
        assert!(matches!(normalize("0/1/2024"), Err(DateFormatError::InvalidDate(_))));
        assert_eq!(normalize("2/29/2024").unwrap(), "February 29, 2024");
    }

    #[test]
    fn test_numeric_stamp_parses_back() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 8).unwrap();

        assert_eq!(format_numeric(date), "10/8/2026");
        assert_eq!(parse_slash_date(&format_numeric(date)).unwrap(), date);
    }
}
