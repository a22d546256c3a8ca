// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait through which configuration text reaches the
//! parser. Concrete sources live in the adapters layer.

pub mod source;

// Re-export commonly used types
pub use source::LineSource;
