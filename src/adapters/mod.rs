// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing line source implementations.
//!
//! Each adapter implements the `LineSource` trait from the ports layer so that
//! its text can be parsed into a `Store`.

pub mod file;
pub mod reader;
pub mod text;

pub use file::FileSource;
pub use reader::ReaderSource;
pub use text::TextSource;
