//! GS1 AI Component Linters
//!
//! A library of independent linter functions that validate individual GS1
//! Application Identifier (AI) data components against syntactic or
//! code-list rules, for example checking that a three-digit string is a
//! legitimate ISO 4217 currency code or ISO 3166 country code.
//!
//! # Features
//!
//! - **Linters**: one pure function per rule, uniform `LintResult` outcome
//! - **Error spans**: every failure carries the byte range of the bad data
//!   for precise highlighting
//! - **Static tables**: code lists are embedded, sorted, and searched in
//!   O(log n) with no allocation
//! - **Pluggable lookup**: membership linters accept a replacement lookup
//!   strategy so deployments can refresh code lists without a rebuild
//!
//! # Quick Start
//!
//! ```rust
//! use gs1_ai_linters::linters::{lint_hhmm, lint_iso3166};
//!
//! assert!(lint_iso3166("276").is_ok());
//!
//! let err = lint_iso3166("999").unwrap_err();
//! assert_eq!(err.span().offset, 0);
//! assert_eq!(err.span().length, 3);
//!
//! let err = lint_hhmm("0060").unwrap_err();
//! assert_eq!(err.span().slice("0060"), "60");
//! ```
//!
//! # Modules
//!
//! - [`linters`]: the linter functions, one module per rule
//! - [`lookup`]: the fixed-set membership validator and its pluggable
//!   lookup strategy
//! - [`error`]: the shared error taxonomy
//! - [`span`]: error-span reporting

pub mod error;
pub mod linters;
pub mod lookup;
pub mod span;

// Re-export commonly used types at the crate root
pub use error::{LintError, LintResult};
pub use linters::{LinterFn, linter_from_name};
pub use lookup::{CodeLookup, CodeSet, MembershipLinter};
pub use span::Span;
