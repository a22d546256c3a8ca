// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the keyword/value parser.
//!
//! This example demonstrates:
//! - Parsing a configuration file (or inline text when none is given)
//! - Retrieving required and optional values
//! - Type conversions (string, integer, unsigned, double, bool, lists)
//! - Handling illegal values and printing the store
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example basic_usage -- path/to/ga.cfg
//! ```

use kvparse::prelude::*;

const SAMPLE: &str = "\
# genetic algorithm settings
population.size: 200
generations = 500
mutation.rate: 0.015
elitism: yes
seed: -1
operators: \"uniform crossover\"
operators: swap
weights: 0.5 0.3 0.2
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== kvparse: Basic Usage ===\n");

    let mut store = Store::new();
    match std::env::args().nth(1) {
        Some(path) => {
            store.parse_source(&mut FileSource::from_file(path))?;
        }
        None => {
            store.parse_str("sample", SAMPLE)?;
        }
    }

    println!("1. Required values:");
    let population = store.require_unsigned("population.size")?;
    let generations = store.require_integer("generations")?;
    println!("   population.size = {}", population);
    println!("   generations = {}", generations);

    println!("\n2. Optional values with defaults:");
    let rate = store.get_double("mutation.rate")?.unwrap_or(0.01);
    let elitism = store.get_bool("elitism")?.unwrap_or(false);
    let crossover = store.get_double("crossover.rate")?.unwrap_or(0.9);
    println!("   mutation.rate = {}", rate);
    println!("   elitism = {}", elitism);
    println!("   crossover.rate = {} (default)", crossover);

    println!("\n3. Repeated keywords and token lists:");
    for op in store.get_string_list("operators")?.unwrap_or_default() {
        println!("   operator: {}", op);
    }
    let weights = store.get_double_list("weights")?.unwrap_or_default();
    println!("   weights = {:?}", weights);

    println!("\n4. Error handling:");
    match store.get_string("operators") {
        Ok(value) => println!("   operators = {:?}", value),
        Err(e) => println!("   {} ({:?})", e, e.kind()),
    }
    match store.get_unsigned("seed") {
        Ok(value) => println!("   seed = {:?}", value),
        Err(e) => println!("   {} ({:?})", e, e.kind()),
    }

    println!("\n5. Store contents:");
    store.dump(std::io::stdout()).map_err(|e| KvError::io("stdout", e))?;

    println!("\n=== Example Complete ===");
    Ok(())
}
