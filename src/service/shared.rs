// SPDX-License-Identifier: MIT OR Apache-2.0

//! A process-wide store.
//!
//! Programs that want a single settings registry for the whole run can use the
//! store returned by [`shared`] instead of passing a [`Store`] around. It starts
//! empty and lives until the process exits.

use crate::domain::Store;
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

static SHARED: Lazy<RwLock<Store>> = Lazy::new(|| RwLock::new(Store::new()));

/// Returns the process-wide store.
///
/// # Examples
///
/// ```rust
/// use kvparse::domain::TypedAccessor;
/// use kvparse::service::{shared, with_shared, with_shared_mut};
///
/// # fn main() -> kvparse::domain::Result<()> {
/// with_shared_mut(|store| store.parse_str("startup", "threads: 4"))?;
///
/// let threads = with_shared(|store| store.require_unsigned("threads"))?;
/// assert_eq!(threads, 4);
///
/// assert!(shared().read().unwrap().keyword_exists("threads"));
/// # Ok(())
/// # }
/// ```
pub fn shared() -> &'static RwLock<Store> {
    &SHARED
}

/// Runs `f` with read access to the process-wide store.
pub fn with_shared<T>(f: impl FnOnce(&Store) -> T) -> T {
    let store = SHARED.read().unwrap_or_else(PoisonError::into_inner);
    f(&store)
}

/// Runs `f` with write access to the process-wide store.
pub fn with_shared_mut<T>(f: impl FnOnce(&mut Store) -> T) -> T {
    let mut store = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut store)
}
