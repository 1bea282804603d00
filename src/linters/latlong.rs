//! The `latlong` linter ensures that the given data represents a WGS84
//! coordinate expressed as the concatenation of two 10-digit numbers.

use crate::error::{LintError, LintResult};
use crate::linters::first_non_digit;
use crate::span::Span;

/// Reads an all-digit slice as a number. Callers must have rejected
/// non-digit input already.
fn digits_value(data: &str) -> u64 {
    data.bytes().fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Validates that an AI component represents a WGS84 coordinate expressed
/// as the concatenation of two 10-digit numbers.
///
/// # Errors
///
/// - [`LintError::LatLongInvalidLength`] if the data is not 20 characters.
/// - [`LintError::NonDigitCharacter`] if the data contains a non-digit character.
/// - [`LintError::InvalidLatitude`] if the latitude part is greater than 1800000000.
/// - [`LintError::InvalidLongitude`] if the longitude part is greater than 3600000000.
pub fn lint_latlong(data: &str) -> LintResult {
    if data.len() != 20 {
        return Err(LintError::LatLongInvalidLength {
            span: Span::entire(data),
        });
    }

    if let Some(pos) = first_non_digit(data) {
        return Err(LintError::NonDigitCharacter {
            span: Span::new(pos, 1),
        });
    }

    if digits_value(&data[..10]) > 1_800_000_000 {
        return Err(LintError::InvalidLatitude {
            span: Span::new(0, 10),
        });
    }

    if digits_value(&data[10..]) > 3_600_000_000 {
        return Err(LintError::InvalidLongitude {
            span: Span::new(10, 10),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates_pass() {
        assert!(lint_latlong("02790858483015297971").is_ok());
        assert!(lint_latlong("00000000000000000000").is_ok());
        assert!(lint_latlong("18000000003600000000").is_ok());
    }

    #[test]
    fn wrong_length_covers_whole_input() {
        for data in ["", "0279085848301529797", "027908584830152979711"] {
            let err = lint_latlong(data).unwrap_err();
            assert_eq!(
                err,
                LintError::LatLongInvalidLength {
                    span: Span::entire(data)
                },
                "{data:?}"
            );
        }
    }

    #[test]
    fn latitude_out_of_range() {
        let err = lint_latlong("18000000010000000000").unwrap_err();
        assert_eq!(err, LintError::InvalidLatitude { span: Span::new(0, 10) });

        // Latitude is checked before longitude.
        let err = lint_latlong("18000000013600000001").unwrap_err();
        assert_eq!(err, LintError::InvalidLatitude { span: Span::new(0, 10) });
    }

    #[test]
    fn longitude_out_of_range() {
        let err = lint_latlong("00000000003600000001").unwrap_err();
        assert_eq!(
            err,
            LintError::InvalidLongitude {
                span: Span::new(10, 10)
            }
        );
    }

    #[test]
    fn non_digit_is_located_exactly() {
        let err = lint_latlong("0279085848301529797x").unwrap_err();
        assert_eq!(
            err,
            LintError::NonDigitCharacter {
                span: Span::new(19, 1)
            }
        );
    }
}
