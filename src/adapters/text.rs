// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory text source adapter.

use crate::domain::Result;
use crate::ports::LineSource;
use std::io::BufRead;

/// Configuration text held in memory under a chosen name.
///
/// Handy for embedded defaults and for tests. The source can be opened any
/// number of times.
///
/// # Examples
///
/// ```rust
/// use kvparse::adapters::TextSource;
/// use kvparse::domain::{Store, TypedAccessor};
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let mut defaults = TextSource::new("defaults", "population.size: 100\n");
/// let mut store = Store::new();
/// store.parse_source(&mut defaults)?;
/// assert_eq!(store.require_unsigned("population.size")?, 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    name: String,
    content: String,
}

impl TextSource {
    /// Creates a source called `name` holding `content`.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the configuration text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl LineSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.content.as_bytes()))
    }
}
