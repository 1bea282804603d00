//! The `iso3166alpha2` linter ensures that the data represents a valid ISO
//! 3166 alpha-2 country code.
//!
//! The two-letter country codes are defined by ISO 3166-1 as the "alpha-2"
//! codes.

use crate::error::{LintError, LintResult};
use crate::lookup::{CodeSet, MembershipLinter};
use crate::span::Span;

/// Set of ISO 3166 alpha-2 country codes (249 entries).
#[rustfmt::skip]
pub static ISO3166_ALPHA2: CodeSet = CodeSet::new(2, &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
]);

fn not_iso3166_alpha2(span: Span) -> LintError {
    LintError::NotIso3166Alpha2 { span }
}

/// Default membership linter over [`ISO3166_ALPHA2`].
pub static ISO3166ALPHA2: MembershipLinter =
    MembershipLinter::new(&ISO3166_ALPHA2, not_iso3166_alpha2);

/// Validates that an AI component is an ISO 3166 alpha-2 country code.
///
/// # Errors
///
/// [`LintError::NotIso3166Alpha2`] if the data is not an alpha-2 country
/// code. The span covers the entire component.
pub fn lint_iso3166alpha2(data: &str) -> LintResult {
    ISO3166ALPHA2.lint(data)
}
