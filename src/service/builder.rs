// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for assembling a store from several sources.
//!
//! Sources are parsed in the order they were added. Values for a keyword that
//! appears in more than one source accumulate, exactly as if the sources had
//! been concatenated.

use crate::adapters::{FileSource, TextSource};
use crate::domain::{ErrorKind, Result, Store};
use crate::ports::LineSource;
use std::path::Path;

struct SourceEntry {
    source: Box<dyn LineSource>,
    /// Skip the source, instead of failing, if it cannot be opened
    optional: bool,
}

/// Builder for constructing a [`Store`] from one or more sources.
///
/// # Examples
///
/// ```rust
/// use kvparse::domain::TypedAccessor;
/// use kvparse::service::StoreBuilder;
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let store = StoreBuilder::new()
///     .with_text("defaults", "generations: 100\nelitism: no\n")
///     .with_text("overrides", "crossover.rate: 0.9\n")
///     .build()?;
///
/// assert_eq!(store.require_integer("generations")?, 100);
/// assert_eq!(store.require_double("crossover.rate")?, 0.9);
/// # Ok(())
/// # }
/// ```
pub struct StoreBuilder {
    sources: Vec<SourceEntry>,
}

impl StoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source that must be readable.
    pub fn with_source(mut self, source: Box<dyn LineSource>) -> Self {
        self.sources.push(SourceEntry {
            source,
            optional: false,
        });
        self
    }

    /// Adds a source that is skipped with a warning if it cannot be opened.
    ///
    /// Syntax errors in an optional source still fail the build.
    pub fn with_optional_source(mut self, source: Box<dyn LineSource>) -> Self {
        self.sources.push(SourceEntry {
            source,
            optional: true,
        });
        self
    }

    /// Adds a configuration file that must exist.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use kvparse::service::StoreBuilder;
    ///
    /// # fn main() -> kvparse::domain::Result<()> {
    /// let store = StoreBuilder::new()
    ///     .with_file("/etc/ga/run.cfg")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(Box::new(FileSource::from_file(path)))
    }

    /// Adds in-memory configuration text.
    pub fn with_text(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_source(Box::new(TextSource::new(name, content)))
    }

    /// Adds `<config dir>/<app_name>.cfg` as an optional source.
    ///
    /// If no configuration directory can be determined for this platform, the
    /// builder is returned unchanged.
    pub fn with_default_location(self, app_name: &str, qualifier: &str) -> Self {
        match FileSource::from_default_location(app_name, qualifier) {
            Ok(source) => self.with_optional_source(Box::new(source)),
            Err(e) => {
                tracing::warn!("Skipping default configuration location: {}", e);
                self
            }
        }
    }

    /// Parses every source, in order, into `store`.
    ///
    /// Returns the number of keyword/value pairs added. Sources parsed before a
    /// failing one keep their values.
    pub fn load_into(self, store: &mut Store) -> Result<usize> {
        let mut added = 0;

        for mut entry in self.sources {
            match store.parse_source(entry.source.as_mut()) {
                Ok(count) => added += count,
                Err(e) if entry.optional && e.kind() == ErrorKind::Io => {
                    tracing::warn!(
                        "Skipping optional configuration source '{}': {}",
                        entry.source.name(),
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(added)
    }

    /// Builds a new store from the configured sources.
    pub fn build(self) -> Result<Store> {
        let mut store = Store::new();
        self.load_into(&mut store)?;
        Ok(store)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a new [`StoreBuilder`].
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }
}
