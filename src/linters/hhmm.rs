//! The `hhmm` linter ensures that the given data is a meaningful time as
//! hours and minutes, in HHMM format.

use crate::error::{LintError, LintResult};
use crate::linters::{first_non_digit, two_digit};
use crate::span::Span;

/// Validates that an AI component conforms to HHMM format.
///
/// # Errors
///
/// - [`LintError::HourWithMinuteTooShort`] if the data is shorter than four characters.
/// - [`LintError::HourWithMinuteTooLong`] if the data is longer than four characters.
/// - [`LintError::NonDigitCharacter`] if the data contains a non-digit character.
/// - [`LintError::IllegalHour`] if the hour is greater than 23.
/// - [`LintError::IllegalMinute`] if the minute is greater than 59.
pub fn lint_hhmm(data: &str) -> LintResult {
    if data.len() != 4 {
        let span = Span::entire(data);
        return Err(if data.len() < 4 {
            LintError::HourWithMinuteTooShort { span }
        } else {
            LintError::HourWithMinuteTooLong { span }
        });
    }

    if let Some(pos) = first_non_digit(data) {
        return Err(LintError::NonDigitCharacter {
            span: Span::new(pos, 1),
        });
    }

    if two_digit(data, 0) > 23 {
        return Err(LintError::IllegalHour {
            span: Span::new(0, 2),
        });
    }

    if two_digit(data, 2) > 59 {
        return Err(LintError::IllegalMinute {
            span: Span::new(2, 2),
        });
    }

    Ok(())
}
