// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the keyword and value types, the line parser, the store and
//! the typed accessor. It does not open files or talk to the outside world; it
//! only consumes lines handed to it.

pub mod accessor;
pub mod errors;
pub mod keyword;
pub mod parser;
pub mod raw_value;
pub mod store;
pub mod typed_value;

// Re-export commonly used types
pub use accessor::TypedAccessor;
pub use errors::{ErrorKind, KvError, Result, SyntaxIssue};
pub use keyword::Keyword;
pub use raw_value::RawValue;
pub use store::Store;
pub use typed_value::{TypedValue, ValueType};
