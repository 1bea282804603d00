//! The `iban` linter ensures that the data conforms to the format required
//! for an International Bank Account Number (IBAN).
//!
//! The format for an IBAN is specified by ISO 13616-1.

use crate::error::{LintError, LintResult};
use crate::linters::iso3166alpha2::lint_iso3166alpha2;
use crate::span::Span;

/// No clear minimum length; sufficient for the check characters.
const IBAN_MIN_LENGTH: usize = 10;

/// Maps an IBAN character to its checksum value: digits to 0-9, letters to
/// 10-35. Anything else is not permissible within an IBAN.
fn iban_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

/// Validates that an AI component conforms to the format required for an
/// IBAN.
///
/// # Errors
///
/// - [`LintError::IbanTooShort`] if the data is too short to be an IBAN.
/// - [`LintError::IllegalIbanCountryCode`] if the leading two characters
///   are not a valid ISO 3166 alpha-2 country code.
/// - [`LintError::InvalidIbanCharacter`] if the data contains a character
///   that isn't permissible within an IBAN.
/// - [`LintError::IncorrectIbanChecksum`] if the IBAN checksum is
///   incorrect for the data.
pub fn lint_iban(data: &str) -> LintResult {
    if data.len() <= IBAN_MIN_LENGTH {
        return Err(LintError::IbanTooShort {
            span: Span::entire(data),
        });
    }

    // `get` rather than indexing: byte offset 2 may fall inside a
    // multi-byte character, which can never be a country code.
    if !data
        .get(..2)
        .is_some_and(|cc| lint_iso3166alpha2(cc).is_ok())
    {
        return Err(LintError::IllegalIbanCountryCode {
            span: Span::new(0, 2),
        });
    }

    let bytes = data.as_bytes();

    // The check characters must be within the IBAN alphabet before the
    // checksum over the rearranged data is attempted.
    for pos in 2..4 {
        if iban_value(bytes[pos]).is_none() {
            return Err(LintError::InvalidIbanCharacter {
                span: Span::new(pos, 1),
            });
        }
    }

    // Mod-97 checksum over the data rearranged to start at the fifth
    // character and wrap around, with letters expanded to two digits
    // (A => 10, B => 11, ...).
    let mut csum: u32 = 0;
    for pos in (4..bytes.len()).chain(0..4) {
        let Some(value) = iban_value(bytes[pos]) else {
            return Err(LintError::InvalidIbanCharacter {
                span: Span::new(pos, 1),
            });
        };
        csum = csum * (if value < 10 { 10 } else { 100 }) + value;
        csum %= 97;
    }

    if csum != 1 {
        return Err(LintError::IncorrectIbanChecksum {
            span: Span::new(2, 2),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ibans_pass() {
        for data in [
            "FR7630006000011234567890189",
            "DE91100000000123456789",
            "GR9608100010000001234567890",
            "MU43BOMM0101123456789101000MUR",
            "PK70BANK0000123456789000",
            "PL10105000997603123456789123",
            "RO09BCYP0000001234567890",
            "SA4420000001234567891234",
            "ES7921000813610123456789",
            "CH5604835012345678009",
            "GB98MIDL07009312345678",
            "BE71096123456769",
            "LC14BOSL123456789012345678901234",
        ] {
            assert!(lint_iban(data).is_ok(), "{data}");
        }
    }

    #[test]
    fn incorrect_checksum_is_reported_on_check_digits() {
        for data in [
            "BE71096123456760",
            "LC14BOSL123456789012345678901230",
        ] {
            let err = lint_iban(data).unwrap_err();
            assert_eq!(
                err,
                LintError::IncorrectIbanChecksum {
                    span: Span::new(2, 2)
                },
                "{data}"
            );
        }
    }

    #[test]
    fn short_input_covers_whole_span() {
        for data in ["", "B", "BE", "BE7", "BE71", "BE7109612"] {
            let err = lint_iban(data).unwrap_err();
            assert_eq!(
                err,
                LintError::IbanTooShort {
                    span: Span::entire(data)
                },
                "{data:?}"
            );
        }
    }

    #[test]
    fn unknown_country_code_is_rejected() {
        let err = lint_iban("XX591000000001234567").unwrap_err();
        assert_eq!(
            err,
            LintError::IllegalIbanCountryCode {
                span: Span::new(0, 2)
            }
        );
    }

    #[test]
    fn multibyte_characters_in_the_country_code_are_rejected() {
        // The second byte of "é" straddles the country-code boundary.
        for data in ["aé1234567890", "é91100000000123456789", "ÉÉ91100000000123456789"] {
            let err = lint_iban(data).unwrap_err();
            assert_eq!(
                err,
                LintError::IllegalIbanCountryCode {
                    span: Span::new(0, 2)
                },
                "{data}"
            );
        }
    }

    #[test]
    fn characters_outside_the_alphabet_are_located_exactly() {
        let err = lint_iban("BEx1096123456769").unwrap_err();
        assert_eq!(err, LintError::InvalidIbanCharacter { span: Span::new(2, 1) });

        let err = lint_iban("BE710961234567_9").unwrap_err();
        assert_eq!(
            err,
            LintError::InvalidIbanCharacter {
                span: Span::new(14, 1)
            }
        );
    }
}
