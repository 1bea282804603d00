//! The `iso3166list` linter ensures that the data is a concatenated
//! sequence of ISO 3166 "num-3" country codes.

use crate::error::{LintError, LintResult};
use crate::linters::iso3166::lint_iso3166;
use crate::span::Span;

/// Validates that an AI component is a concatenated sequence of ISO 3166
/// "num-3" country codes.
///
/// Each group of three characters is checked against the num-3 set. An
/// empty list is invalid.
///
/// # Errors
///
/// [`LintError::NotIso3166`] if any part of the sequence is not a num-3
/// country code, or the data is empty. The span covers the offending
/// three-character group, or the trailing fragment when the length is not
/// a multiple of three.
pub fn lint_iso3166list(data: &str) -> LintResult {
    let bytes = data.as_bytes();
    let mut offset = 0;

    while offset + 3 <= bytes.len() {
        // Grouping is by byte, so a group boundary may split a multi-byte
        // character; such a group can never be a num-3 code.
        let in_set = std::str::from_utf8(&bytes[offset..offset + 3])
            .is_ok_and(|group| lint_iso3166(group).is_ok());
        if !in_set {
            return Err(LintError::NotIso3166 {
                span: Span::new(offset, 3),
            });
        }
        offset += 3;
    }

    // Any remaining characters or an empty list are invalid.
    if offset != data.len() || data.is_empty() {
        return Err(LintError::NotIso3166 {
            span: Span::new(offset, data.len() - offset),
        });
    }

    Ok(())
}
