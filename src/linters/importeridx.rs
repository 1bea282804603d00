//! The `importeridx` linter ensures that the data is a valid importer
//! index, as used in a facility or trade-item identifier.

use crate::error::{LintError, LintResult};
use crate::span::Span;

/// All valid importer index characters.
const IMPORTER_IDX_CHARS: &str = "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Validates that an AI component is a valid importer index.
///
/// # Errors
///
/// - [`LintError::ImporterIndexMustBeOneCharacter`] if the data is not a single character.
/// - [`LintError::InvalidImporterIndexCharacter`] if the character is not in the importer index alphabet.
pub fn lint_importeridx(data: &str) -> LintResult {
    if data.len() != 1 {
        return Err(LintError::ImporterIndexMustBeOneCharacter {
            span: Span::entire(data),
        });
    }

    if !data.chars().all(|c| IMPORTER_IDX_CHARS.contains(c)) {
        return Err(LintError::InvalidImporterIndexCharacter {
            span: Span::new(0, 1),
        });
    }

    Ok(())
}
