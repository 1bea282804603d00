//! Error types for AI component linting.
//!
//! Every linter reports failures through the single [`LintError`] enum so
//! that callers dispatching over a family of linters can handle results
//! uniformly. New linters extend the enum with new variants; callers that
//! only distinguish "ok" from "not ok" are unaffected.

use crate::span::Span;
use serde::Serialize;
use thiserror::Error;

/// The outcome of linting one AI component.
pub type LintResult = Result<(), LintError>;

/// A failure detected while linting an AI component.
///
/// Each variant carries the [`Span`] of the offending data for error
/// highlighting. The enum is non-exhaustive: linters added to the family
/// later introduce new variants without breaking callers that only
/// distinguish success from failure.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum LintError {
    /// The data is not an ISO 3166 num-3 country code.
    #[error("not an ISO 3166 num-3 country code")]
    NotIso3166 {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is not an ISO 3166 alpha-2 country code.
    #[error("not an ISO 3166 alpha-2 country code")]
    NotIso3166Alpha2 {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is not an ISO 4217 num-3 currency code.
    #[error("not an ISO 4217 num-3 currency code")]
    NotIso4217 {
        /// Location of the bad data.
        span: Span,
    },

    /// A character was found where a digit is required.
    #[error("non-digit character")]
    NonDigitCharacter {
        /// Location of the offending character.
        span: Span,
    },

    /// The data is too short for HHMM format.
    #[error("too short for an hour with minute")]
    HourWithMinuteTooShort {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is too long for HHMM format.
    #[error("too long for an hour with minute")]
    HourWithMinuteTooLong {
        /// Location of the bad data.
        span: Span,
    },

    /// The hour component is outside 00-23.
    #[error("invalid hour")]
    IllegalHour {
        /// Location of the hour component.
        span: Span,
    },

    /// The minute component is outside 00-59.
    #[error("invalid minute")]
    IllegalMinute {
        /// Location of the minute component.
        span: Span,
    },

    /// The second component is outside 00-59.
    #[error("invalid second")]
    IllegalSecond {
        /// Location of the second component.
        span: Span,
    },

    /// The data is neither MM nor MMSS format.
    #[error("not in MM or MMSS format")]
    MmssInvalidLength {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is too short for YYMMDD format.
    #[error("too short for a date")]
    DateTooShort {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is too long for YYMMDD format.
    #[error("too long for a date")]
    DateTooLong {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is too short for YYMMDDHH format.
    #[error("too short for a date with hour")]
    DateWithHourTooShort {
        /// Location of the bad data.
        span: Span,
    },

    /// The data is too long for YYMMDDHH format.
    #[error("too long for a date with hour")]
    DateWithHourTooLong {
        /// Location of the bad data.
        span: Span,
    },

    /// The month component is outside 01-12.
    #[error("invalid month")]
    IllegalMonth {
        /// Location of the month component.
        span: Span,
    },

    /// The day component is not a valid day of the given month.
    #[error("invalid day of month")]
    IllegalDay {
        /// Location of the day component.
        span: Span,
    },

    /// An importer index must be exactly one character.
    #[error("importer index must be a single character")]
    ImporterIndexMustBeOneCharacter {
        /// Location of the bad data.
        span: Span,
    },

    /// The character is not in the importer index alphabet.
    #[error("invalid importer index character")]
    InvalidImporterIndexCharacter {
        /// Location of the offending character.
        span: Span,
    },

    /// A latitude/longitude pair must be exactly 20 digits.
    #[error("invalid length for a latitude/longitude pair")]
    LatLongInvalidLength {
        /// Location of the bad data.
        span: Span,
    },

    /// The latitude part is outside the range 0000000000-1800000000.
    #[error("invalid latitude")]
    InvalidLatitude {
        /// Location of the latitude part.
        span: Span,
    },

    /// The longitude part is outside the range 0000000000-3600000000.
    #[error("invalid longitude")]
    InvalidLongitude {
        /// Location of the longitude part.
        span: Span,
    },

    /// The data is too short to be an IBAN.
    #[error("too short for an IBAN")]
    IbanTooShort {
        /// Location of the bad data.
        span: Span,
    },

    /// The leading characters are not an ISO 3166 alpha-2 country code.
    #[error("invalid IBAN country code")]
    IllegalIbanCountryCode {
        /// Location of the country code.
        span: Span,
    },

    /// A character outside the IBAN alphabet was found.
    #[error("invalid IBAN character")]
    InvalidIbanCharacter {
        /// Location of the offending character.
        span: Span,
    },

    /// The IBAN check digits do not match the account data.
    #[error("incorrect IBAN checksum")]
    IncorrectIbanChecksum {
        /// Location of the check digits.
        span: Span,
    },
}

impl LintError {
    /// Returns the span of the offending data.
    pub fn span(&self) -> Span {
        use LintError::*;
        match self {
            NotIso3166 { span }
            | NotIso3166Alpha2 { span }
            | NotIso4217 { span }
            | NonDigitCharacter { span }
            | HourWithMinuteTooShort { span }
            | HourWithMinuteTooLong { span }
            | IllegalHour { span }
            | IllegalMinute { span }
            | IllegalSecond { span }
            | MmssInvalidLength { span }
            | DateTooShort { span }
            | DateTooLong { span }
            | DateWithHourTooShort { span }
            | DateWithHourTooLong { span }
            | IllegalMonth { span }
            | IllegalDay { span }
            | ImporterIndexMustBeOneCharacter { span }
            | InvalidImporterIndexCharacter { span }
            | LatLongInvalidLength { span }
            | InvalidLatitude { span }
            | InvalidLongitude { span }
            | IbanTooShort { span }
            | IllegalIbanCountryCode { span }
            | InvalidIbanCharacter { span }
            | IncorrectIbanChecksum { span } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_carries_span() {
        let error = LintError::IllegalHour {
            span: Span::new(0, 2),
        };
        assert_eq!(error.span(), Span::new(0, 2));
    }

    #[test]
    fn error_display_is_human_readable() {
        let error = LintError::NotIso3166 {
            span: Span::new(0, 3),
        };
        assert_eq!(error.to_string(), "not an ISO 3166 num-3 country code");
    }

    #[test]
    fn error_serializes_with_tag_and_span() {
        let error = LintError::IllegalMinute {
            span: Span::new(2, 2),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["type"], "illegal_minute");
        assert_eq!(json["span"]["offset"], 2);
        assert_eq!(json["span"]["length"], 2);
    }
}
