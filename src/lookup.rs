//! Fixed-set membership lookup over static code tables.
//!
//! Many linters in this family reduce to the same shape: the component is
//! valid if and only if it is a verbatim member of a static, sorted table
//! of fixed-width codes. [`CodeSet`] holds such a table, [`CodeLookup`] is
//! the pluggable membership strategy, and [`MembershipLinter`] turns a
//! strategy into a linter with whole-input error spans.

use crate::error::{LintError, LintResult};
use crate::span::Span;

/// An immutable, lexicographically sorted table of fixed-width codes.
///
/// Tables are embedded at compile time and never mutated. Sortedness and
/// uniqueness are data-authoring invariants; each table's test module
/// asserts them via [`CodeSet::is_strictly_sorted`].
#[derive(Debug)]
pub struct CodeSet {
    codes: &'static [&'static str],
    width: usize,
}

impl CodeSet {
    /// Creates a code set over a sorted table of `width`-byte codes.
    pub const fn new(width: usize, codes: &'static [&'static str]) -> Self {
        Self { codes, width }
    }

    /// Returns true if `code` is a verbatim member of the table.
    ///
    /// Binary search with ordinal (byte-order) comparison. Any input that
    /// is not byte-for-byte equal to a table entry, including input of the
    /// wrong length, is simply not found.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.binary_search(&code).is_ok()
    }

    /// Returns the fixed code width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of codes in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over the codes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }

    /// Verifies the data-authoring invariants: strict ascending order (which
    /// implies no duplicates) and uniform code width.
    pub fn is_strictly_sorted(&self) -> bool {
        self.codes.windows(2).all(|w| w[0] < w[1])
            && self.codes.iter().all(|c| c.len() == self.width)
    }
}

/// A membership test for one code domain.
///
/// The default strategy is binary search over the embedded [`CodeSet`].
/// Deployments that need a refreshed code list (for example newly issued
/// currency codes) implement this trait, or supply a closure, and inject it
/// with [`MembershipLinter::with_lookup`] without touching the linter's
/// call surface.
pub trait CodeLookup: Send + Sync {
    /// Returns true if `code` is a member of the set.
    fn contains(&self, code: &str) -> bool;
}

impl CodeLookup for CodeSet {
    fn contains(&self, code: &str) -> bool {
        CodeSet::contains(self, code)
    }
}

impl CodeLookup for &'static CodeSet {
    fn contains(&self, code: &str) -> bool {
        CodeSet::contains(self, code)
    }
}

impl<F> CodeLookup for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains(&self, code: &str) -> bool {
        self(code)
    }
}

/// An exact-match membership linter over a [`CodeLookup`] strategy.
///
/// Format checking and set membership are deliberately fused into a single
/// exact-match test: malformed input is rejected by non-membership alone,
/// with no character-class pre-check.
#[derive(Debug, Clone, Copy)]
pub struct MembershipLinter<L = &'static CodeSet> {
    lookup: L,
    on_miss: fn(Span) -> LintError,
}

impl MembershipLinter<&'static CodeSet> {
    /// Creates a linter backed by the embedded table.
    ///
    /// `on_miss` builds the domain-specific error for a failed lookup.
    pub const fn new(set: &'static CodeSet, on_miss: fn(Span) -> LintError) -> Self {
        Self {
            lookup: set,
            on_miss,
        }
    }
}

impl<L: CodeLookup> MembershipLinter<L> {
    /// Replaces the lookup strategy, keeping the error mapping.
    ///
    /// Swapping strategies must not change observable outcomes for a fixed
    /// effective set; only the mechanics of the lookup may differ.
    pub fn with_lookup<M: CodeLookup>(&self, lookup: M) -> MembershipLinter<M> {
        MembershipLinter {
            lookup,
            on_miss: self.on_miss,
        }
    }

    /// Lints one AI component against the set.
    ///
    /// Non-membership is all-or-nothing, so the error span always covers
    /// the entire input: offset 0, length of the whole component.
    pub fn lint(&self, data: &str) -> LintResult {
        if self.lookup.contains(data) {
            Ok(())
        } else {
            Err((self.on_miss)(Span::entire(data)))
        }
    }
}
