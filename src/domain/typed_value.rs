// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type tags and tagged results for type-directed lookups.

use std::fmt;

/// The semantic type requested from [`TypedAccessor::get`](crate::domain::TypedAccessor::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A single string, with enclosing double quotes removed.
    String,
    /// A single signed integer.
    Integer,
    /// A single unsigned integer.
    Unsigned,
    /// A single double.
    Double,
    /// A single boolean.
    Boolean,
    /// Every raw value stored for the keyword, in insertion order.
    StringList,
    /// The whitespace-separated tokens of the single value.
    TokenList,
    /// The tokens of the single value, each read as a signed integer.
    IntegerList,
    /// The tokens of the single value, each read as an unsigned integer.
    UnsignedList,
    /// The tokens of the single value, each read as a double.
    DoubleList,
    /// The tokens of the single value, each read as a boolean.
    BooleanList,
}

impl ValueType {
    /// Returns `true` for types that need the keyword to hold exactly one value.
    pub fn requires_unique_value(&self) -> bool {
        !matches!(self, ValueType::StringList)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Unsigned => "unsigned integer",
            ValueType::Double => "double",
            ValueType::Boolean => "boolean",
            ValueType::StringList => "string list",
            ValueType::TokenList => "token list",
            ValueType::IntegerList => "integer list",
            ValueType::UnsignedList => "unsigned integer list",
            ValueType::DoubleList => "double list",
            ValueType::BooleanList => "boolean list",
        };
        f.write_str(name)
    }
}

/// A converted value, tagged with its type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// See [`ValueType::String`].
    String(String),
    /// See [`ValueType::Integer`].
    Integer(i64),
    /// See [`ValueType::Unsigned`].
    Unsigned(u64),
    /// See [`ValueType::Double`].
    Double(f64),
    /// See [`ValueType::Boolean`].
    Boolean(bool),
    /// See [`ValueType::StringList`].
    StringList(Vec<String>),
    /// See [`ValueType::TokenList`].
    TokenList(Vec<String>),
    /// See [`ValueType::IntegerList`].
    IntegerList(Vec<i64>),
    /// See [`ValueType::UnsignedList`].
    UnsignedList(Vec<u64>),
    /// See [`ValueType::DoubleList`].
    DoubleList(Vec<f64>),
    /// See [`ValueType::BooleanList`].
    BooleanList(Vec<bool>),
}

impl TypedValue {
    /// Returns the tag matching this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::String(_) => ValueType::String,
            TypedValue::Integer(_) => ValueType::Integer,
            TypedValue::Unsigned(_) => ValueType::Unsigned,
            TypedValue::Double(_) => ValueType::Double,
            TypedValue::Boolean(_) => ValueType::Boolean,
            TypedValue::StringList(_) => ValueType::StringList,
            TypedValue::TokenList(_) => ValueType::TokenList,
            TypedValue::IntegerList(_) => ValueType::IntegerList,
            TypedValue::UnsignedList(_) => ValueType::UnsignedList,
            TypedValue::DoubleList(_) => ValueType::DoubleList,
            TypedValue::BooleanList(_) => ValueType::BooleanList,
        }
    }
}
