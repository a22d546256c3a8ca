// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated keyword newtype.
//!
//! A keyword is the identifier on the left-hand side of a configuration line. It
//! starts with a letter or underscore, continues with letters, digits, `_`, `.`
//! or `-`, and may end with any number of apostrophes (`mutation.rate''`).

use crate::domain::errors::SyntaxIssue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

static KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*'*$").expect("keyword pattern is a valid regex")
});

/// A configuration keyword that is known to satisfy the identifier grammar.
///
/// Keywords compare by exact, case-sensitive string equality and order
/// lexicographically, which is the order a [`Store`](crate::domain::Store) lists
/// them in.
///
/// # Examples
///
/// ```
/// use kvparse::domain::Keyword;
///
/// let keyword = Keyword::parse("population.size").unwrap();
/// assert_eq!(keyword.as_str(), "population.size");
///
/// assert!(Keyword::parse("1st").is_err());
/// assert!(Keyword::parse("x''").is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Validates `text` against the identifier grammar and wraps it.
    ///
    /// The text is taken as-is; surrounding whitespace makes it invalid.
    pub fn parse(text: &str) -> std::result::Result<Self, SyntaxIssue> {
        if Self::is_valid(text) {
            Ok(Keyword(text.to_string()))
        } else {
            Err(SyntaxIssue::InvalidKeyword(text.to_string()))
        }
    }

    /// Returns `true` if `text` is a valid keyword.
    pub fn is_valid(text: &str) -> bool {
        KEYWORD_PATTERN.is_match(text)
    }

    /// Returns the keyword as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the keyword into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Keyword {
    type Error = SyntaxIssue;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        if Self::is_valid(&s) {
            Ok(Keyword(s))
        } else {
            Err(SyntaxIssue::InvalidKeyword(s))
        }
    }
}

impl TryFrom<&str> for Keyword {
    type Error = SyntaxIssue;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
