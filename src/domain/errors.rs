// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the keyword/value parser.
//!
//! Every failure the crate can report is a [`KvError`]. Errors are fail-fast: a
//! malformed line aborts the parse of its source, and a bad lookup is reported to
//! the caller without any local recovery.

use thiserror::Error;

/// The reason a line was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxIssue {
    /// The line contains neither a `:` nor a `=` delimiter.
    #[error("missing ':' or '=' delimiter")]
    MissingDelimiter,

    /// The text left of the delimiter is not a valid keyword.
    #[error("invalid keyword '{0}'")]
    InvalidKeyword(String),
}

/// The broad category of a [`KvError`].
///
/// Useful when a caller only needs to branch on what went wrong and does not
/// care about the details carried by the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A source line could not be parsed.
    Syntax,
    /// A required keyword was not present.
    MissingKeyword,
    /// A scalar lookup hit a keyword with several values.
    AmbiguousKeyword,
    /// A stored value does not fit the requested type.
    IllegalValue,
    /// The source could not be opened or read.
    Io,
}

/// The main error type for parsing and accessing configuration values.
///
/// # Examples
///
/// ```
/// use kvparse::domain::errors::{ErrorKind, KvError};
///
/// let err = KvError::MissingKeyword {
///     keyword: "population.size".to_string(),
/// };
/// assert_eq!(err.kind(), ErrorKind::MissingKeyword);
/// assert_eq!(err.to_string(), "required keyword 'population.size' not specified");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KvError {
    /// A line of a source could not be parsed.
    #[error("syntax error in {source_name} ({line_number}): {line}")]
    Syntax {
        /// The identifier of the source being parsed (usually a file name)
        source_name: String,
        /// The 1-based number of the offending line
        line_number: usize,
        /// The offending line, after comment stripping
        line: String,
        /// What was wrong with the line
        #[source]
        issue: SyntaxIssue,
    },

    /// A required keyword was not present in the store.
    #[error("required keyword '{keyword}' not specified")]
    MissingKeyword {
        /// The keyword that was requested
        keyword: String,
    },

    /// A single value was requested for a keyword holding several.
    #[error("keyword '{keyword}' is ambiguous; {count} values specified")]
    AmbiguousKeyword {
        /// The keyword that was requested
        keyword: String,
        /// How many values the keyword holds
        count: usize,
    },

    /// A stored value does not match the grammar of the requested type.
    #[error("illegal value '{value}' for keyword '{keyword}'; expected {expected}")]
    IllegalValue {
        /// The keyword whose value was rejected
        keyword: String,
        /// The rejected text
        value: String,
        /// A description of what would have been accepted
        expected: String,
    },

    /// A source could not be opened or read.
    #[error("failed to read configuration source '{source_name}': {source}")]
    Io {
        /// The identifier of the source
        source_name: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl KvError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KvError::Syntax { .. } => ErrorKind::Syntax,
            KvError::MissingKeyword { .. } => ErrorKind::MissingKeyword,
            KvError::AmbiguousKeyword { .. } => ErrorKind::AmbiguousKeyword,
            KvError::IllegalValue { .. } => ErrorKind::IllegalValue,
            KvError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Creates an `IllegalValue` error.
    pub fn illegal_value(
        keyword: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        KvError::IllegalValue {
            keyword: keyword.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Creates an `Io` error for the named source.
    pub fn io(source_name: impl Into<String>, source: std::io::Error) -> Self {
        KvError::Io {
            source_name: source_name.into(),
            source,
        }
    }
}

/// A specialized Result type for parser and accessor operations.
pub type Result<T> = std::result::Result<T, KvError>;
