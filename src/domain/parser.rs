// SPDX-License-Identifier: MIT OR Apache-2.0

//! The line parser.
//!
//! Each input line is processed as follows:
//!
//! 1. everything from the first `#` onwards is dropped,
//! 2. lines that are now blank are skipped,
//! 3. the line is split at the first `:`, or at the first `=` if there is no `:`,
//! 4. both halves are trimmed of spaces, tabs and carriage returns,
//! 5. the left half must be a valid [`Keyword`].
//!
//! A `#` inside double quotes still starts a comment.

use crate::domain::errors::{KvError, Result, SyntaxIssue};
use crate::domain::keyword::Keyword;
use crate::domain::raw_value::RawValue;
use std::io::{self, BufRead};

/// Removes the comment, if any, from `line`.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn trim_field(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\r'))
}

/// Parses a single line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
///
/// # Examples
///
/// ```
/// use kvparse::domain::parser::parse_line;
///
/// let (keyword, value) = parse_line("  seed = 1234  # fixed for tests").unwrap().unwrap();
/// assert_eq!(keyword.as_str(), "seed");
/// assert_eq!(value.as_str(), "1234");
///
/// assert!(parse_line("   # nothing here").unwrap().is_none());
/// assert!(parse_line("justtext").is_err());
/// ```
pub fn parse_line(line: &str) -> std::result::Result<Option<(Keyword, RawValue)>, SyntaxIssue> {
    let line = strip_comment(line);
    if trim_field(line).is_empty() {
        return Ok(None);
    }

    let delimiter = line
        .find(':')
        .or_else(|| line.find('='))
        .ok_or(SyntaxIssue::MissingDelimiter)?;

    // both delimiters are single bytes
    let keyword = Keyword::parse(trim_field(&line[..delimiter]))?;
    let value = RawValue::from(trim_field(&line[delimiter + 1..]));

    Ok(Some((keyword, value)))
}

/// Parses the lines of one named source, collecting keyword/value pairs.
///
/// Nothing is written to a store until the whole source has been read, so a
/// source with a bad line contributes no values at all.
#[derive(Debug)]
pub struct LineParser<'a> {
    source_name: &'a str,
    line_number: usize,
    pairs: Vec<(Keyword, RawValue)>,
}

impl<'a> LineParser<'a> {
    /// Creates a parser for the source called `source_name`.
    pub fn new(source_name: &'a str) -> Self {
        Self {
            source_name,
            line_number: 0,
            pairs: Vec::new(),
        }
    }

    /// Parses the next line of the source.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;

        match parse_line(line) {
            Ok(Some(pair)) => {
                self.pairs.push(pair);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(issue) => Err(KvError::Syntax {
                source_name: self.source_name.to_string(),
                line_number: self.line_number,
                line: strip_comment(line).to_string(),
                issue,
            }),
        }
    }

    /// Reads and parses every line of `reader`.
    ///
    /// Line endings (`\n` or `\r\n`) are removed before parsing. A line that is
    /// not valid UTF-8 fails the parse with an I/O error of kind `InvalidData`.
    pub fn feed_reader<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| KvError::io(self.source_name, e))?;
            if read == 0 {
                return Ok(());
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = std::str::from_utf8(&buf).map_err(|e| {
                KvError::io(
                    self.source_name,
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line {} is not valid UTF-8: {}", self.line_number + 1, e),
                    ),
                )
            })?;
            self.feed(line)?;
        }
    }

    /// Returns the identifier of the source being parsed.
    pub fn source_name(&self) -> &str {
        self.source_name
    }

    /// Returns the number of lines seen so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Consumes the parser, returning the pairs in the order they were read.
    pub fn finish(self) -> Vec<(Keyword, RawValue)> {
        self.pairs
    }
}
