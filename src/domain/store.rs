// SPDX-License-Identifier: MIT OR Apache-2.0

//! The keyword/value store.
//!
//! A [`Store`] maps each keyword to the ordered list of raw values given for it.
//! Repeating a keyword appends rather than replaces, and a keyword whose list
//! becomes empty is removed, so every keyword present has at least one value.

use crate::domain::accessor::TypedAccessor;
use crate::domain::errors::{KvError, Result};
use crate::domain::keyword::Keyword;
use crate::domain::parser::LineParser;
use crate::domain::raw_value::RawValue;
use crate::ports::LineSource;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// An in-memory store of configuration values.
///
/// Stores are plain values: create one per run, or several for independent
/// test cases. Keywords are kept in lexicographic order.
///
/// # Examples
///
/// ```rust
/// use kvparse::domain::{Store, TypedAccessor};
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let mut store = Store::new();
/// store.parse_str("ga.cfg", "k: a\nk: b\n")?;
///
/// assert!(store.keyword_exists("k"));
/// assert!(!store.has_unique_value("k"));
/// assert_eq!(store.require_string_list("k")?, vec!["a", "b"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: BTreeMap<Keyword, Vec<RawValue>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Removes every keyword and value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keywords in lexicographic order.
    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.keys()
    }

    /// Iterates over every keyword together with its values.
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &[RawValue])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Appends `value` to the values of an already validated keyword.
    ///
    /// Returns the number of values the keyword now holds.
    pub fn insert(&mut self, keyword: Keyword, value: RawValue) -> usize {
        tracing::trace!("Adding value '{}' for keyword '{}'", value, keyword);
        let values = self.entries.entry(keyword).or_default();
        values.push(value);
        values.len()
    }

    /// Appends `value` to the values of `keyword`.
    ///
    /// The keyword is checked against the identifier grammar; a malformed keyword
    /// is reported as an illegal value. Returns the number of values the keyword
    /// now holds.
    pub fn add_value(&mut self, keyword: &str, value: impl Into<RawValue>) -> Result<usize> {
        let keyword = Keyword::parse(keyword).map_err(|_| {
            KvError::illegal_value(
                keyword,
                keyword,
                "a keyword matching [A-Za-z_][A-Za-z0-9_.-]*'*",
            )
        })?;
        Ok(self.insert(keyword, value.into()))
    }

    /// Removes the first occurrence of `value` from the values of `keyword`.
    ///
    /// Returns the number of values left for the keyword. Zero means the keyword
    /// is not (or no longer) present, or that `value` was not one of its values.
    pub fn remove_value(&mut self, keyword: &str, value: &str) -> usize {
        let Some(values) = self.entries.get_mut(keyword) else {
            return 0;
        };
        let Some(pos) = values.iter().position(|v| v.as_str() == value) else {
            return 0;
        };
        values.remove(pos);

        let remaining = values.len();
        if remaining == 0 {
            self.entries.remove(keyword);
        }
        remaining
    }

    /// Parses a sequence of lines from the source called `source_name`.
    ///
    /// The source is parsed as a whole: if any line is malformed, the error is
    /// returned and the store is left untouched. Returns the number of
    /// keyword/value pairs added.
    pub fn parse_lines<I, S>(&mut self, source_name: &str, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = LineParser::new(source_name);
        for line in lines {
            parser.feed(line.as_ref())?;
        }
        Ok(self.commit(parser))
    }

    /// Parses every line readable from `reader`.
    ///
    /// See [`parse_lines`](Self::parse_lines). Read failures are reported as I/O
    /// errors naming `source_name`.
    pub fn parse_reader<R: BufRead>(&mut self, source_name: &str, reader: R) -> Result<usize> {
        let mut parser = LineParser::new(source_name);
        parser.feed_reader(reader)?;
        Ok(self.commit(parser))
    }

    /// Parses configuration text held in memory.
    pub fn parse_str(&mut self, source_name: &str, content: &str) -> Result<usize> {
        self.parse_reader(source_name, content.as_bytes())
    }

    /// Opens and parses a [`LineSource`].
    pub fn parse_source(&mut self, source: &mut dyn LineSource) -> Result<usize> {
        let source_name = source.name().to_string();
        let reader = source.open()?;
        self.parse_reader(&source_name, reader)
    }

    fn commit(&mut self, parser: LineParser<'_>) -> usize {
        let lines = parser.lines_read();
        let source_name = parser.source_name().to_string();
        let pairs = parser.finish();
        let added = pairs.len();
        for (keyword, value) in pairs {
            self.insert(keyword, value);
        }
        tracing::debug!(
            "Parsed configuration source '{}': {} lines, {} values",
            source_name,
            lines,
            added
        );
        added
    }

    /// Writes a listing of every keyword and its values, one keyword per line.
    ///
    /// Each line reads `Keyword: <keyword>  |  Values: <v1> <v2> ...`, in
    /// lexicographic keyword order.
    pub fn dump<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (keyword, values) in &self.entries {
            let joined = values
                .iter()
                .map(RawValue::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "Keyword: {}  |  Values: {}", keyword, joined)?;
        }
        Ok(())
    }
}

impl TypedAccessor for Store {
    fn values(&self, keyword: &str) -> Option<&[RawValue]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }
}
