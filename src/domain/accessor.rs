// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, validated access to stored values.
//!
//! The [`TypedAccessor`] trait turns the raw strings held for a keyword into
//! typed values. Implementors only provide [`TypedAccessor::values`]; every
//! typed getter is built on top of it.
//!
//! # Lookup contract
//!
//! Each `get_*` method returns:
//!
//! - `Ok(Some(value))` when the keyword is present and its value converts,
//! - `Ok(None)` when the keyword is absent, so a caller-held default survives,
//! - `Err(KvError::AmbiguousKeyword)` when a single value is needed but several
//!   are stored,
//! - `Err(KvError::IllegalValue)` when the text does not fit the type.
//!
//! The matching `require_*` method turns an absent keyword into
//! `Err(KvError::MissingKeyword)`.

use crate::domain::errors::{KvError, Result};
use crate::domain::raw_value::{
    convert_bool, convert_double, convert_integer, convert_token, convert_unsigned, RawValue,
};
use crate::domain::typed_value::{TypedValue, ValueType};

/// Read-only, typed access to a keyword/value store.
///
/// # Examples
///
/// ```rust
/// use kvparse::domain::{Store, TypedAccessor};
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let mut store = Store::new();
/// store.parse_str("inline", "generations: 500\nelitism = yes\n")?;
///
/// assert_eq!(store.get_integer("generations")?, Some(500));
/// assert_eq!(store.require_bool("elitism")?, true);
///
/// let mut rate = 0.01;
/// if let Some(configured) = store.get_double("mutation.rate")? {
///     rate = configured;
/// }
/// assert_eq!(rate, 0.01);
/// # Ok(())
/// # }
/// ```
pub trait TypedAccessor {
    /// Returns every raw value stored for `keyword`, in insertion order.
    ///
    /// Returns `None` when the keyword is absent.
    fn values(&self, keyword: &str) -> Option<&[RawValue]>;

    /// Returns `true` if `keyword` has at least one value.
    fn keyword_exists(&self, keyword: &str) -> bool {
        self.values(keyword).is_some_and(|values| !values.is_empty())
    }

    /// Returns `true` if `keyword` has exactly one value.
    fn has_unique_value(&self, keyword: &str) -> bool {
        matches!(self.values(keyword), Some([_]))
    }

    /// Returns the value of `keyword` if it is the only one stored.
    fn value(&self, keyword: &str) -> Option<&RawValue> {
        match self.values(keyword) {
            Some([only]) => Some(only),
            _ => None,
        }
    }

    /// Returns the single value of `keyword`, failing if there are several.
    fn unique_value(&self, keyword: &str) -> Result<Option<&RawValue>> {
        match self.values(keyword) {
            None | Some([]) => Ok(None),
            Some([only]) => Ok(Some(only)),
            Some(values) => Err(KvError::AmbiguousKeyword {
                keyword: keyword.to_string(),
                count: values.len(),
            }),
        }
    }

    /// Looks up `keyword` as a string. See [`RawValue::as_string`] for quoting.
    fn get_string(&self, keyword: &str) -> Result<Option<String>> {
        self.unique_value(keyword)?
            .map(|value| value.as_string(keyword))
            .transpose()
    }

    /// Looks up `keyword` as a signed integer.
    fn get_integer(&self, keyword: &str) -> Result<Option<i64>> {
        self.unique_value(keyword)?
            .map(|value| value.as_integer(keyword))
            .transpose()
    }

    /// Looks up `keyword` as an unsigned integer.
    fn get_unsigned(&self, keyword: &str) -> Result<Option<u64>> {
        self.unique_value(keyword)?
            .map(|value| value.as_unsigned(keyword))
            .transpose()
    }

    /// Looks up `keyword` as a double.
    fn get_double(&self, keyword: &str) -> Result<Option<f64>> {
        self.unique_value(keyword)?
            .map(|value| value.as_double(keyword))
            .transpose()
    }

    /// Looks up `keyword` as a boolean.
    fn get_bool(&self, keyword: &str) -> Result<Option<bool>> {
        self.unique_value(keyword)?
            .map(|value| value.as_bool(keyword))
            .transpose()
    }

    /// Returns all raw values of `keyword` as strings, in insertion order.
    ///
    /// Several values are allowed; no quote stripping is applied.
    fn get_string_list(&self, keyword: &str) -> Result<Option<Vec<String>>> {
        Ok(self
            .values(keyword)
            .filter(|values| !values.is_empty())
            .map(|values| values.iter().map(|v| v.as_str().to_string()).collect()))
    }

    /// Splits the single value of `keyword` into whitespace-separated tokens.
    fn get_token_list(&self, keyword: &str) -> Result<Option<Vec<String>>> {
        self.unique_value(keyword)?
            .map(|value| value.convert_tokens(keyword, convert_token))
            .transpose()
    }

    /// Reads every token of the single value of `keyword` as a signed integer.
    fn get_integer_list(&self, keyword: &str) -> Result<Option<Vec<i64>>> {
        self.unique_value(keyword)?
            .map(|value| value.convert_tokens(keyword, convert_integer))
            .transpose()
    }

    /// Reads every token of the single value of `keyword` as an unsigned integer.
    fn get_unsigned_list(&self, keyword: &str) -> Result<Option<Vec<u64>>> {
        self.unique_value(keyword)?
            .map(|value| value.convert_tokens(keyword, convert_unsigned))
            .transpose()
    }

    /// Reads every token of the single value of `keyword` as a double.
    fn get_double_list(&self, keyword: &str) -> Result<Option<Vec<f64>>> {
        self.unique_value(keyword)?
            .map(|value| value.convert_tokens(keyword, convert_double))
            .transpose()
    }

    /// Reads every token of the single value of `keyword` as a boolean.
    fn get_bool_list(&self, keyword: &str) -> Result<Option<Vec<bool>>> {
        self.unique_value(keyword)?
            .map(|value| value.convert_tokens(keyword, convert_bool))
            .transpose()
    }

    /// Like [`get_string`](Self::get_string), but an absent keyword is an error.
    fn require_string(&self, keyword: &str) -> Result<String> {
        required(keyword, self.get_string(keyword)?)
    }

    /// Like [`get_integer`](Self::get_integer), but an absent keyword is an error.
    fn require_integer(&self, keyword: &str) -> Result<i64> {
        required(keyword, self.get_integer(keyword)?)
    }

    /// Like [`get_unsigned`](Self::get_unsigned), but an absent keyword is an error.
    fn require_unsigned(&self, keyword: &str) -> Result<u64> {
        required(keyword, self.get_unsigned(keyword)?)
    }

    /// Like [`get_double`](Self::get_double), but an absent keyword is an error.
    fn require_double(&self, keyword: &str) -> Result<f64> {
        required(keyword, self.get_double(keyword)?)
    }

    /// Like [`get_bool`](Self::get_bool), but an absent keyword is an error.
    fn require_bool(&self, keyword: &str) -> Result<bool> {
        required(keyword, self.get_bool(keyword)?)
    }

    /// Like [`get_string_list`](Self::get_string_list), but an absent keyword is an error.
    fn require_string_list(&self, keyword: &str) -> Result<Vec<String>> {
        required(keyword, self.get_string_list(keyword)?)
    }

    /// Like [`get_token_list`](Self::get_token_list), but an absent keyword is an error.
    fn require_token_list(&self, keyword: &str) -> Result<Vec<String>> {
        required(keyword, self.get_token_list(keyword)?)
    }

    /// Like [`get_integer_list`](Self::get_integer_list), but an absent keyword is an error.
    fn require_integer_list(&self, keyword: &str) -> Result<Vec<i64>> {
        required(keyword, self.get_integer_list(keyword)?)
    }

    /// Like [`get_unsigned_list`](Self::get_unsigned_list), but an absent keyword is an error.
    fn require_unsigned_list(&self, keyword: &str) -> Result<Vec<u64>> {
        required(keyword, self.get_unsigned_list(keyword)?)
    }

    /// Like [`get_double_list`](Self::get_double_list), but an absent keyword is an error.
    fn require_double_list(&self, keyword: &str) -> Result<Vec<f64>> {
        required(keyword, self.get_double_list(keyword)?)
    }

    /// Like [`get_bool_list`](Self::get_bool_list), but an absent keyword is an error.
    fn require_bool_list(&self, keyword: &str) -> Result<Vec<bool>> {
        required(keyword, self.get_bool_list(keyword)?)
    }

    /// Looks up `keyword` as the type named by `value_type`.
    ///
    /// When `required` is `true` an absent keyword fails with
    /// [`KvError::MissingKeyword`]; otherwise it yields `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvparse::domain::{Store, TypedAccessor, TypedValue, ValueType};
    ///
    /// # fn main() -> kvparse::domain::Result<()> {
    /// let mut store = Store::new();
    /// store.parse_str("inline", "weights: 0.5 0.25 0.25")?;
    ///
    /// let weights = store.get("weights", ValueType::DoubleList, true)?;
    /// assert_eq!(weights, Some(TypedValue::DoubleList(vec![0.5, 0.25, 0.25])));
    ///
    /// assert_eq!(store.get("absent", ValueType::Integer, false)?, None);
    /// assert!(store.get("absent", ValueType::Integer, true).is_err());
    /// # Ok(())
    /// # }
    /// ```
    fn get(
        &self,
        keyword: &str,
        value_type: ValueType,
        required: bool,
    ) -> Result<Option<TypedValue>> {
        if value_type.requires_unique_value() {
            self.unique_value(keyword)?;
        }

        let value = match value_type {
            ValueType::String => self.get_string(keyword)?.map(TypedValue::String),
            ValueType::Integer => self.get_integer(keyword)?.map(TypedValue::Integer),
            ValueType::Unsigned => self.get_unsigned(keyword)?.map(TypedValue::Unsigned),
            ValueType::Double => self.get_double(keyword)?.map(TypedValue::Double),
            ValueType::Boolean => self.get_bool(keyword)?.map(TypedValue::Boolean),
            ValueType::StringList => self.get_string_list(keyword)?.map(TypedValue::StringList),
            ValueType::TokenList => self.get_token_list(keyword)?.map(TypedValue::TokenList),
            ValueType::IntegerList => self.get_integer_list(keyword)?.map(TypedValue::IntegerList),
            ValueType::UnsignedList => {
                self.get_unsigned_list(keyword)?.map(TypedValue::UnsignedList)
            }
            ValueType::DoubleList => self.get_double_list(keyword)?.map(TypedValue::DoubleList),
            ValueType::BooleanList => self.get_bool_list(keyword)?.map(TypedValue::BooleanList),
        };

        match value {
            None if required => Err(missing(keyword)),
            other => Ok(other),
        }
    }
}

fn missing(keyword: &str) -> KvError {
    KvError::MissingKeyword {
        keyword: keyword.to_string(),
    }
}

fn required<T>(keyword: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| missing(keyword))
}
