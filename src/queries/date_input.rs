use chrono::NaiveDate;

use crate::error::{QueryError, Result};
use crate::utils::constants::{DATE_INPUT_FORMAT, EXPECTED_DATE_FORMAT};

/// Parse a caller-supplied calendar date.
///
/// The input must match `YYYY-MM-DD` literally: a four-digit year, a
/// two-digit month and a two-digit day, with the month and day in range for
/// that year. chrono's parser is lenient about field widths, so the shape is
/// checked before handing off to it.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if !has_expected_shape(input) {
        return Err(invalid(input));
    }

    NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT).map_err(|_| invalid(input))
}

fn has_expected_shape(input: &str) -> bool {
    let bytes = input.as_bytes();

    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

fn invalid(input: &str) -> QueryError {
    QueryError::InvalidDate {
        input: input.to_string(),
        expected_format: EXPECTED_DATE_FORMAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_parses() {
        let date = parse_date("2017-02-28").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 2, 28).unwrap());
    }

    #[test]
    fn test_month_out_of_range_fails() {
        let err = parse_date("2017-13-01").unwrap_err();
        assert!(matches!(err, QueryError::InvalidDate { .. }));
    }

    #[test]
    fn test_day_out_of_range_for_month_fails() {
        assert!(parse_date("2017-02-30").is_err());
        assert!(parse_date("2017-04-31").is_err());
    }

    #[test]
    fn test_leap_day_only_valid_in_leap_years() {
        assert!(parse_date("2016-02-29").is_ok());
        assert!(parse_date("2017-02-29").is_err());
    }

    #[test]
    fn test_shape_violations_fail() {
        for input in [
            "2017-2-28",
            "17-02-28",
            "2017/02/28",
            "2017-02-28 ",
            "2017-02",
            "20170228",
            "not-a-date",
            "",
        ] {
            assert!(parse_date(input).is_err(), "accepted '{}'", input);
        }
    }

    #[test]
    fn test_error_carries_input_and_expected_format() {
        match parse_date("2017-13-01").unwrap_err() {
            QueryError::InvalidDate {
                input,
                expected_format,
            } => {
                assert_eq!(input, "2017-13-01");
                assert_eq!(expected_format, "YYYY-MM-DD");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
