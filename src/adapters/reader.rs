// SPDX-License-Identifier: MIT OR Apache-2.0

//! Buffered reader source adapter.

use crate::domain::Result;
use crate::ports::LineSource;
use std::io::{self, BufRead, StdinLock};

/// A [`LineSource`] over any buffered reader, such as standard input or a socket.
///
/// The reader is consumed as it is parsed, so opening the source a second time
/// only yields whatever was not read the first time.
///
/// # Examples
///
/// ```rust
/// use kvparse::adapters::ReaderSource;
/// use kvparse::domain::{Store, TypedAccessor};
/// use std::io::Cursor;
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let mut source = ReaderSource::new("piped", Cursor::new("verbose: yes\n"));
/// let mut store = Store::new();
/// store.parse_source(&mut source)?;
/// assert!(store.require_bool("verbose")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps `reader` under the identifier `name`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<StdinLock<'static>> {
    /// Creates a source reading the process's standard input, named `<stdin>`.
    pub fn stdin() -> Self {
        Self::new("<stdin>", io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(&mut self.reader))
    }
}
