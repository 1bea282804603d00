//! The `yymmddhh` linter ensures that the given data is a meaningful date
//! with an hour, in YYMMDDHH format.

use crate::error::{LintError, LintResult};
use crate::linters::yymmdd::lint_yymmdd;
use crate::linters::{first_non_digit, two_digit};
use crate::span::Span;

/// Validates that an AI component conforms to the YYMMDDHH format.
///
/// # Errors
///
/// - [`LintError::DateWithHourTooShort`] if the data is shorter than eight characters.
/// - [`LintError::DateWithHourTooLong`] if the data is longer than eight characters.
/// - [`LintError::NonDigitCharacter`] if the data contains a non-digit character.
/// - [`LintError::IllegalMonth`] if the month is not 01 to 12.
/// - [`LintError::IllegalDay`] if the day is not valid for the given month.
/// - [`LintError::IllegalHour`] if the hour is greater than 23.
pub fn lint_yymmddhh(data: &str) -> LintResult {
    if data.len() != 8 {
        let span = Span::entire(data);
        return Err(if data.len() < 8 {
            LintError::DateWithHourTooShort { span }
        } else {
            LintError::DateWithHourTooLong { span }
        });
    }

    if let Some(pos) = first_non_digit(data) {
        return Err(LintError::NonDigitCharacter {
            span: Span::new(pos, 1),
        });
    }

    lint_yymmdd(&data[..6])?;

    if two_digit(data, 6) > 23 {
        return Err(LintError::IllegalHour {
            span: Span::new(6, 2),
        });
    }

    Ok(())
}
