// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer for assembling and sharing stores.
//!
//! This module contains the `StoreBuilder`, which parses several sources into one
//! store, and (with the `shared` feature) a process-wide store.

pub mod builder;
#[cfg(feature = "shared")]
pub mod shared;

// Re-export commonly used types
pub use builder::StoreBuilder;
#[cfg(feature = "shared")]
pub use shared::{shared, with_shared, with_shared_mut};
