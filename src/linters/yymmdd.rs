//! The `yymmdd` linter ensures that the given data is a meaningful date,
//! in YYMMDD format.

use crate::error::{LintError, LintResult};
use crate::linters::{first_non_digit, two_digit};
use crate::span::Span;

/// Returns the number of days in `month` for a two-digit year.
///
/// Two-digit years land in the 2000-2099 window, where every year
/// divisible by four is a leap year.
pub(crate) fn days_in_month(yy: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if yy % 4 == 0 => 29,
        2 => 28,
        _ => 0,
    }
}

/// Validates that an AI component conforms to the YYMMDD format.
///
/// # Errors
///
/// - [`LintError::DateTooShort`] if the data is shorter than six characters.
/// - [`LintError::DateTooLong`] if the data is longer than six characters.
/// - [`LintError::NonDigitCharacter`] if the data contains a non-digit character.
/// - [`LintError::IllegalMonth`] if the month is not 01 to 12.
/// - [`LintError::IllegalDay`] if the day is not valid for the given month.
pub fn lint_yymmdd(data: &str) -> LintResult {
    if data.len() != 6 {
        let span = Span::entire(data);
        return Err(if data.len() < 6 {
            LintError::DateTooShort { span }
        } else {
            LintError::DateTooLong { span }
        });
    }

    if let Some(pos) = first_non_digit(data) {
        return Err(LintError::NonDigitCharacter {
            span: Span::new(pos, 1),
        });
    }

    let month = two_digit(data, 2);
    if month < 1 || month > 12 {
        return Err(LintError::IllegalMonth {
            span: Span::new(2, 2),
        });
    }

    let day = two_digit(data, 4);
    if day < 1 || day > days_in_month(two_digit(data, 0), month) {
        return Err(LintError::IllegalDay {
            span: Span::new(4, 2),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dates_pass() {
        assert!(lint_yymmdd("000606").is_ok());
        assert!(lint_yymmdd("250101").is_ok());
        assert!(lint_yymmdd("251231").is_ok());
        assert!(lint_yymmdd("250430").is_ok());
    }

    #[test]
    fn month_out_of_range() {
        for data in ["250001", "251301", "259901"] {
            let err = lint_yymmdd(data).unwrap_err();
            assert_eq!(err, LintError::IllegalMonth { span: Span::new(2, 2) }, "{data}");
        }
    }

    #[test]
    fn day_out_of_range() {
        for data in ["250100", "250132", "250431", "250931"] {
            let err = lint_yymmdd(data).unwrap_err();
            assert_eq!(err, LintError::IllegalDay { span: Span::new(4, 2) }, "{data}");
        }
    }

    #[test]
    fn february_leap_year_rule() {
        // 2024 and 2000 are leap years in the two-digit window; 2023 is not.
        assert!(lint_yymmdd("240229").is_ok());
        assert!(lint_yymmdd("000229").is_ok());

        let err = lint_yymmdd("230229").unwrap_err();
        assert_eq!(err, LintError::IllegalDay { span: Span::new(4, 2) });

        let err = lint_yymmdd("240230").unwrap_err();
        assert_eq!(err, LintError::IllegalDay { span: Span::new(4, 2) });
    }

    #[test]
    fn non_digit_is_located_exactly() {
        for (data, pos) in [("x50101", 0), ("25x101", 2), ("2501x1", 4)] {
            let err = lint_yymmdd(data).unwrap_err();
            assert_eq!(
                err,
                LintError::NonDigitCharacter {
                    span: Span::new(pos, 1)
                },
                "{data}"
            );
        }
    }

    #[test]
    fn wrong_length_covers_whole_input() {
        for data in ["", "2", "25010"] {
            let err = lint_yymmdd(data).unwrap_err();
            assert_eq!(
                err,
                LintError::DateTooShort {
                    span: Span::entire(data)
                },
                "{data:?}"
            );
        }
        let err = lint_yymmdd("2501011").unwrap_err();
        assert_eq!(err, LintError::DateTooLong { span: Span::new(0, 7) });
    }
}
