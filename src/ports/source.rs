// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line source trait definition.
//!
//! This module defines the `LineSource` trait, the port through which the parser
//! receives configuration text. The parser never opens files itself; anything
//! that can name itself and hand out a buffered reader can feed a store.

use crate::domain::Result;
use std::io::BufRead;

/// A named, line-oriented source of configuration text.
///
/// The name is only used in diagnostics, for example
/// `syntax error in settings.cfg (7): ...`.
///
/// # Examples
///
/// ```rust
/// use kvparse::ports::LineSource;
/// use kvparse::domain::{Result, Store, TypedAccessor};
/// use std::io::BufRead;
///
/// struct Fixed;
///
/// impl LineSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
///         Ok(Box::new("answer: 42\n".as_bytes()))
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let mut store = Store::new();
/// store.parse_source(&mut Fixed)?;
/// assert_eq!(store.require_integer("answer")?, 42);
/// # Ok(())
/// # }
/// ```
pub trait LineSource {
    /// Returns the identifier used for this source in error messages.
    ///
    /// For files this is usually the path as given by the caller.
    fn name(&self) -> &str;

    /// Opens the source for reading.
    ///
    /// Failing to open the source should be reported as
    /// [`KvError::Io`](crate::domain::KvError::Io).
    fn open(&mut self) -> Result<Box<dyn BufRead + '_>>;
}
