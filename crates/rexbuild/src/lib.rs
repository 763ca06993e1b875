//! Fragment-based regular-expression compilation.
//!
//! Patterns are supplied as an ordered sequence of fragments; named
//! fragments become numbered capture groups. Option flags, text encoding
//! and syntax dialect are resolved from loosely-specified tokens, the
//! pattern is compiled once, and the result is an immutable [`Pattern`]
//! handle that owns the engine object until released.
//!
//! # Example
//!
//! ```
//! use rexbuild::{Fragment, compile};
//!
//! let pattern = compile(
//!     &[
//!         Fragment::named("year", r"\d{4}"),
//!         Fragment::new("-"),
//!         Fragment::named("month", r"\d{2}"),
//!     ],
//!     "i",
//!     "utf-8",
//!     "ruby",
//! )?;
//!
//! assert_eq!(pattern.pattern(), r"(\d{4})-(\d{2})");
//! assert_eq!(pattern.group_count(), 2);
//! # Ok::<(), rexbuild::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod assemble;
pub mod encoding;
pub mod options;
pub mod pattern;
pub mod syntax;

mod compile;
mod groups;

#[cfg(test)]
mod pattern_tests;

pub use assemble::Fragment;
pub use encoding::{Encoding, EncodingRequest, Text};
pub use options::Options;
pub use pattern::{Pattern, PatternBuilder, Target, compile, retrieve};
pub use syntax::Syntax;

/// Errors that can occur while building a compiled pattern.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Zero pattern fragments were supplied.
    #[error("pattern vector is empty")]
    EmptyPattern,

    /// Unrecognized syntax dialect name.
    #[error("syntax name \"{0}\" is invalid")]
    InvalidSyntax(String),

    /// The engine rejected the assembled pattern; carries its diagnostic
    /// text verbatim.
    #[error("regex compile: {0}")]
    Compile(String),

    /// The engine object was accessed after `release()`.
    #[error("compiled pattern used after release")]
    UseAfterRelease,
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;
