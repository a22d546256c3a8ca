// SPDX-License-Identifier: MIT OR Apache-2.0

//! A keyword/value configuration file parser with typed accessors.
//!
//! This crate reads a simple line-oriented format into an in-memory store and
//! provides validated, typed access to the stored values:
//!
//! ```text
//! # genetic algorithm settings
//! population.size: 200
//! mutation.rate  = 0.015
//! elitism: yes
//! operators: "uniform crossover"
//! operators: swap
//! weights: 0.5 0.3 0.2
//! ```
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `Keyword`, `RawValue`, the line parser, the `Store` and the
//!   `TypedAccessor` trait, plus the error taxonomy
//! - **Ports**: the `LineSource` trait through which text reaches the parser
//! - **Adapters**: files, in-memory text and arbitrary buffered readers
//! - **Service**: a builder that layers several sources into one store, and an
//!   optional process-wide store
//!
//! # Format
//!
//! - Everything from the first `#` to the end of the line is a comment.
//! - Blank lines are ignored.
//! - Each other line is `keyword: value` or `keyword = value`; the first `:` wins
//!   over any `=`.
//! - Keywords match `[A-Za-z_][A-Za-z0-9_.-]*'*` and are case-sensitive.
//! - Repeating a keyword adds another value instead of replacing the first.
//!
//! # Feature Flags
//!
//! - `shared`: Enable the process-wide store, `service::shared()` (default)
//!
//! # Quick Start
//!
//! ```rust
//! use kvparse::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut store = Store::new();
//! store.parse_str("ga.cfg", "population.size: 200\nelitism: yes\n")?;
//!
//! let size = store.require_unsigned("population.size")?;
//! let elitism = store.get_bool("elitism")?.unwrap_or(false);
//! let rate = store.get_double("mutation.rate")?.unwrap_or(0.01);
//!
//! assert_eq!((size, elitism, rate), (200, true, 0.01));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileSource, ReaderSource, TextSource};
    pub use crate::domain::{
        ErrorKind, Keyword, KvError, RawValue, Result, Store, TypedAccessor, TypedValue,
        ValueType,
    };
    pub use crate::ports::LineSource;
    pub use crate::service::StoreBuilder;
}
