//! Error-span tracking for linted AI components.
//!
//! Linters report failures as a byte range within the component so that
//! callers can highlight exactly the substring that failed validation.

use serde::Serialize;

/// A byte range within a linted AI component.
///
/// Offsets are 0-based. A zero-length span marks a position (for example
/// empty input) rather than a substring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset from the start of the component (0-based).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given offset and length.
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Creates a span covering the whole of `data`.
    ///
    /// Set-membership failures are all-or-nothing, so linters built on
    /// exact-match lookup report the entire component as the bad span.
    pub const fn entire(data: &str) -> Self {
        Self::new(0, data.len())
    }

    /// Returns the end offset of this span.
    pub const fn end_offset(&self) -> usize {
        self.offset + self.length
    }

    /// Returns the substring of `data` covered by this span.
    pub fn slice<'a>(&self, data: &'a str) -> &'a str {
        &data[self.offset..self.end_offset()]
    }
}
