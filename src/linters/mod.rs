//! The linter functions, one module per AI component rule.
//!
//! Every linter has the same shape: a pure function taking the component
//! data and returning a [`LintResult`]. Linters hold no state, perform no
//! I/O and may be called concurrently from any number of threads.

pub mod hhmm;
pub mod iban;
pub mod importeridx;
pub mod iso3166;
pub mod iso3166alpha2;
pub mod iso3166list;
pub mod iso4217;
pub mod latlong;
pub mod mmoptss;
pub mod yymmdd;
pub mod yymmddhh;

pub use hhmm::lint_hhmm;
pub use iban::lint_iban;
pub use importeridx::lint_importeridx;
pub use iso3166::lint_iso3166;
pub use iso3166alpha2::lint_iso3166alpha2;
pub use iso3166list::lint_iso3166list;
pub use iso4217::lint_iso4217;
pub use latlong::lint_latlong;
pub use mmoptss::lint_mmoptss;
pub use yymmdd::lint_yymmdd;
pub use yymmddhh::lint_yymmddhh;

use crate::error::LintResult;
use log::debug;

/// A linter entry point.
pub type LinterFn = fn(&str) -> LintResult;

/// Name table for by-name dispatch, sorted for binary search.
static LINTERS: &[(&str, LinterFn)] = &[
    ("hhmm", lint_hhmm),
    ("iban", lint_iban),
    ("importeridx", lint_importeridx),
    ("iso3166", lint_iso3166),
    ("iso3166alpha2", lint_iso3166alpha2),
    ("iso3166list", lint_iso3166list),
    ("iso4217", lint_iso4217),
    ("latlong", lint_latlong),
    ("mmoptss", lint_mmoptss),
    ("yymmdd", lint_yymmdd),
    ("yymmddhh", lint_yymmddhh),
];

/// Looks up a linter by the name used in the syntax dictionary.
///
/// Returns `None` for unknown names, leaving the caller to decide whether
/// an unrecognized rule is an error.
pub fn linter_from_name(name: &str) -> Option<LinterFn> {
    let found = LINTERS
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|i| LINTERS[i].1);
    if found.is_some() {
        debug!("resolved linter '{name}'");
    } else {
        debug!("unknown linter '{name}'");
    }
    found
}

/// Returns the byte position of the first non-digit, if any.
pub(crate) fn first_non_digit(data: &str) -> Option<usize> {
    data.bytes().position(|b| !b.is_ascii_digit())
}

/// Reads the two-digit number at `offset`. Callers must have rejected
/// non-digit input already.
pub(crate) fn two_digit(data: &str, offset: usize) -> u32 {
    let bytes = data.as_bytes();
    u32::from(bytes[offset] - b'0') * 10 + u32::from(bytes[offset + 1] - b'0')
}
