//! The `mmoptss` linter ensures that the data is a meaningful time
//! fragment as minutes and optional seconds, in MMSS or MM format.

use crate::error::{LintError, LintResult};
use crate::linters::{first_non_digit, two_digit};
use crate::span::Span;

/// Validates that an AI component conforms to one of the MM or MMSS
/// formats.
///
/// # Errors
///
/// - [`LintError::MmssInvalidLength`] if the data is neither two nor four characters.
/// - [`LintError::NonDigitCharacter`] if the data contains a non-digit character.
/// - [`LintError::IllegalMinute`] if the minute is greater than 59.
/// - [`LintError::IllegalSecond`] if the second is greater than 59.
pub fn lint_mmoptss(data: &str) -> LintResult {
    if data.len() != 2 && data.len() != 4 {
        return Err(LintError::MmssInvalidLength {
            span: Span::entire(data),
        });
    }

    if let Some(pos) = first_non_digit(data) {
        return Err(LintError::NonDigitCharacter {
            span: Span::new(pos, 1),
        });
    }

    if two_digit(data, 0) > 59 {
        return Err(LintError::IllegalMinute {
            span: Span::new(0, 2),
        });
    }

    if data.len() == 4 && two_digit(data, 2) > 59 {
        return Err(LintError::IllegalSecond {
            span: Span::new(2, 2),
        });
    }

    Ok(())
}
