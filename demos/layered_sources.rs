// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layering several sources into one store.
//!
//! This example demonstrates:
//! - Built-in defaults supplied as inline text
//! - An optional file in the platform configuration directory
//! - An optional file named on the command line
//! - Publishing the result in the process-wide store
//!
//! Values from later sources are appended to those of earlier ones, so a keyword
//! set in two places becomes ambiguous for scalar lookups. The example reads the
//! last value when that happens.
//!
//! To run this example:
//! ```bash
//! cargo run --example layered_sources -- ./run.cfg
//! ```

use kvparse::prelude::*;
use kvparse::service::{with_shared, with_shared_mut};

const DEFAULTS: &str = "\
threads: 4
log.level: info
output.dir: \"./results\"
";

/// Returns the most recently added value of `keyword`.
fn latest(store: &Store, keyword: &str) -> Option<String> {
    store
        .values(keyword)
        .and_then(|values| values.last())
        .map(|value| value.as_str().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== kvparse: Layered Sources ===\n");

    let mut builder = StoreBuilder::new()
        .with_text("defaults", DEFAULTS)
        .with_default_location("kvparse-demo", "org");

    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_optional_source(Box::new(FileSource::from_file(path)));
    }

    let store = builder.build()?;
    println!("Loaded {} keywords\n", store.len());

    for keyword in ["threads", "log.level", "output.dir"] {
        let count = store.values(keyword).map_or(0, <[RawValue]>::len);
        println!(
            "{} = {} ({} value(s))",
            keyword,
            latest(&store, keyword).unwrap_or_default(),
            count
        );
    }

    with_shared_mut(|shared| *shared = store);

    let threads = with_shared(|shared| {
        shared
            .get_unsigned("threads")
            .or_else(|_| match latest(shared, "threads") {
                Some(text) => RawValue::from(text).as_unsigned("threads").map(Some),
                None => Ok(None),
            })
    })?;
    println!("\nWorker threads from the shared store: {:?}", threads);

    println!("\n=== Example Complete ===");
    Ok(())
}
