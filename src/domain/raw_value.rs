// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration values and their typed conversions.
//!
//! A [`RawValue`] is the text right of the delimiter, trimmed but otherwise
//! untouched. Conversions check the text against a strict lexical grammar before
//! handing it to the standard parsers, so `"3.5"` is never silently read as the
//! integer `3` and `"010"` is always ten.

use crate::domain::errors::{KvError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern is a valid regex"));

static UNSIGNED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("unsigned pattern is a valid regex"));

static DOUBLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]*$").expect("double pattern is a valid regex")
});

/// Tokens accepted as `true` by boolean conversion.
pub const TRUE_TOKENS: [&str; 5] = ["true", "yes", "TRUE", "YES", "1"];

/// Tokens accepted as `false` by boolean conversion.
pub const FALSE_TOKENS: [&str; 5] = ["false", "no", "FALSE", "NO", "0"];

const EXPECTED_INTEGER: &str = "an integer matching [-+]?[0-9]+";
const EXPECTED_UNSIGNED: &str = "an unsigned integer matching \\+?[0-9]+";
const EXPECTED_DOUBLE: &str = "a decimal number matching [-+]?[0-9]*\\.?[0-9]*";
const EXPECTED_BOOLEAN: &str =
    "one of 'true', 'yes', 'TRUE', 'YES', '1', 'false', 'no', 'FALSE', 'NO', '0'";
const EXPECTED_STRING: &str = "a string that is not a lone '\"'";

/// An untyped configuration value exactly as it was stored.
///
/// # Examples
///
/// ```
/// use kvparse::domain::RawValue;
///
/// let value = RawValue::from("007");
/// assert_eq!(value.as_integer("n").unwrap(), 7);
///
/// let value = RawValue::from("\"hello world\"");
/// assert_eq!(value.as_string("greeting").unwrap(), "hello world");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValue(String);

impl RawValue {
    /// Creates a new `RawValue` from a `String`.
    pub fn new(value: String) -> Self {
        RawValue(value)
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the value as a string, removing one pair of enclosing double quotes.
    ///
    /// A value that both starts and ends with `"` and is at least two characters
    /// long has those quotes stripped (`""` becomes the empty string). A value
    /// made of a single `"` is rejected. Anything else is returned verbatim.
    pub fn as_string(&self, keyword: &str) -> Result<String> {
        convert_string(keyword, &self.0)
    }

    /// Converts the value to a signed integer using decimal notation only.
    pub fn as_integer(&self, keyword: &str) -> Result<i64> {
        convert_integer(keyword, &self.0)
    }

    /// Converts the value to an unsigned integer. A leading `-` is never accepted.
    pub fn as_unsigned(&self, keyword: &str) -> Result<u64> {
        convert_unsigned(keyword, &self.0)
    }

    /// Converts the value to a double.
    ///
    /// Digits are optional on either side of the decimal point. A value that
    /// matches the grammar but has no digits at all (`""`, `"."`, `"-"`) reads
    /// as `0.0`.
    pub fn as_double(&self, keyword: &str) -> Result<f64> {
        convert_double(keyword, &self.0)
    }

    /// Converts the value to a boolean using the case-sensitive token sets
    /// [`TRUE_TOKENS`] and [`FALSE_TOKENS`].
    pub fn as_bool(&self, keyword: &str) -> Result<bool> {
        convert_bool(keyword, &self.0)
    }

    /// Splits the value on whitespace.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Converts each whitespace-separated token with `convert`.
    ///
    /// The first token that fails to convert fails the whole call.
    pub fn convert_tokens<T>(
        &self,
        keyword: &str,
        convert: impl Fn(&str, &str) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.tokens().map(|token| convert(keyword, token)).collect()
    }
}

/// Converts `text` the way [`RawValue::as_string`] does.
pub fn convert_string(keyword: &str, text: &str) -> Result<String> {
    if text == "\"" {
        return Err(KvError::illegal_value(keyword, text, EXPECTED_STRING));
    }
    match text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => Ok(inner.to_string()),
        None => Ok(text.to_string()),
    }
}

/// Converts `text` the way [`RawValue::as_integer`] does.
pub fn convert_integer(keyword: &str, text: &str) -> Result<i64> {
    if !INTEGER_PATTERN.is_match(text) {
        return Err(KvError::illegal_value(keyword, text, EXPECTED_INTEGER));
    }
    text.parse::<i64>().map_err(|e| {
        KvError::illegal_value(keyword, text, format!("a 64-bit integer ({})", e))
    })
}

/// Converts `text` the way [`RawValue::as_unsigned`] does.
pub fn convert_unsigned(keyword: &str, text: &str) -> Result<u64> {
    if !UNSIGNED_PATTERN.is_match(text) {
        return Err(KvError::illegal_value(keyword, text, EXPECTED_UNSIGNED));
    }
    text.parse::<u64>().map_err(|e| {
        KvError::illegal_value(keyword, text, format!("a 64-bit unsigned integer ({})", e))
    })
}

/// Converts `text` the way [`RawValue::as_double`] does.
pub fn convert_double(keyword: &str, text: &str) -> Result<f64> {
    if !DOUBLE_PATTERN.is_match(text) {
        return Err(KvError::illegal_value(keyword, text, EXPECTED_DOUBLE));
    }
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Ok(0.0);
    }
    text.parse::<f64>()
        .map_err(|e| KvError::illegal_value(keyword, text, format!("a double ({})", e)))
}

/// Converts `text` the way [`RawValue::as_bool`] does.
pub fn convert_bool(keyword: &str, text: &str) -> Result<bool> {
    if TRUE_TOKENS.contains(&text) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&text) {
        Ok(false)
    } else {
        Err(KvError::illegal_value(keyword, text, EXPECTED_BOOLEAN))
    }
}

/// Returns `text` unchanged; used for plain token lists.
pub fn convert_token(_keyword: &str, text: &str) -> Result<String> {
    Ok(text.to_string())
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue(s.to_string())
    }
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        value.0
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RawValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RawValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
