//! The `iso3166` linter ensures that the data represents a valid ISO 3166
//! "num-3" country code.
//!
//! The three-digit country codes are defined by ISO 3166-1 as the "num-3"
//! codes.

use crate::error::{LintError, LintResult};
use crate::lookup::{CodeSet, MembershipLinter};
use crate::span::Span;

/// Set of ISO 3166 num-3 country codes.
///
/// MAINTENANCE NOTE: updates to the ISO 3166 num-3 country code list are
/// published by the ISO 3166 Maintenance Agency.
#[rustfmt::skip]
pub static ISO3166_NUM3: CodeSet = CodeSet::new(3, &[
    "004", "008", "010", "012", "016", "020", "024", "028", "031", "032", "036", "040", "044", "048",
    "050", "051", "052", "056", "060", "064", "068", "070", "072", "074", "076", "084", "086", "090", "092", "096",
    "100", "104", "108", "112", "116", "120", "124", "132", "136", "140", "144", "148",
    "152", "156", "158", "162", "166", "170", "174", "175", "178", "180", "184", "188", "191", "192", "196",
    "203", "204", "208", "212", "214", "218", "222", "226", "231", "232", "233", "234", "238", "239", "242", "246", "248",
    "250", "254", "258", "260", "262", "266", "268", "270", "275", "276", "288", "292", "296",
    "300", "304", "308", "312", "316", "320", "324", "328", "332", "334", "336", "340", "344", "348",
    "352", "356", "360", "364", "368", "372", "376", "380", "384", "388", "392", "398",
    "400", "404", "408", "410", "414", "417", "418", "422", "426", "428", "430", "434", "438", "440", "442", "446",
    "450", "454", "458", "462", "466", "470", "474", "478", "480", "484", "492", "496", "498", "499",
    "500", "504", "508", "512", "516", "520", "524", "528", "531", "533", "534", "535", "540", "548",
    "554", "558", "562", "566", "570", "574", "578", "580", "581", "583", "584", "585", "586", "591", "598",
    "600", "604", "608", "612", "616", "620", "624", "626", "630", "634", "638", "642", "643", "646",
    "652", "654", "659", "660", "662", "663", "666", "670", "674", "678", "682", "686", "688", "690", "694",
    "702", "703", "704", "705", "706", "710", "716", "724", "728", "729", "732", "740", "744", "748",
    "752", "756", "760", "762", "764", "768", "772", "776", "780", "784", "788", "792", "795", "796", "798",
    "800", "804", "807", "818", "826", "831", "832", "833", "834", "840",
    "850", "854", "858", "860", "862", "876", "882", "887", "894",
]);

fn not_iso3166(span: Span) -> LintError {
    LintError::NotIso3166 { span }
}

/// Default membership linter over [`ISO3166_NUM3`].
///
/// An alternative code list (for example a refreshed table) can be hooked
/// in via [`MembershipLinter::with_lookup`] without changing the call
/// surface; the replacement strategy alone decides membership.
pub static ISO3166: MembershipLinter = MembershipLinter::new(&ISO3166_NUM3, not_iso3166);

/// Validates that an AI component is an ISO 3166 "num-3" country code.
///
/// # Errors
///
/// [`LintError::NotIso3166`] if the data is not a num-3 country code. The
/// span covers the entire component.
pub fn lint_iso3166(data: &str) -> LintResult {
    ISO3166.lint(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_uniform() {
        assert!(ISO3166_NUM3.is_strictly_sorted());
    }

    #[test]
    fn every_assigned_code_passes() {
        for code in ISO3166_NUM3.iter() {
            assert!(lint_iso3166(code).is_ok(), "{code} should pass");
        }
    }

    #[test]
    fn unassigned_codes_fail_with_whole_span() {
        for code in ["000", "001", "002", "003", "005", "009", "011", "999"] {
            let err = lint_iso3166(code).unwrap_err();
            assert_eq!(err, LintError::NotIso3166 { span: Span::new(0, 3) }, "{code}");
        }
    }

    #[test]
    fn wrong_length_fails() {
        for data in ["", "0", "00", "0000", "_894", "894_"] {
            let err = lint_iso3166(data).unwrap_err();
            assert_eq!(err.span(), Span::entire(data), "{data:?}");
        }
    }

    #[test]
    fn non_digit_input_fails_by_non_membership() {
        // No character-class pre-check: "AAA" fails the same way "999" does.
        let err = lint_iso3166("AAA").unwrap_err();
        assert!(matches!(err, LintError::NotIso3166 { .. }));
    }
}
