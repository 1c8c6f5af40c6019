//! Basic usage example for phoneiso-rs
//!
//! This example demonstrates how to:
//! - Classify E.164 numbers from integers, strings and bytes
//! - Reuse one buffer across many lookups
//! - Resolve MCC/MNC pairs to a country and an operator

use phoneiso_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== phoneiso-rs Basic Usage Example ===\n");

    // Example 1: Integers, strings and bytes
    println!("--- Example 1: E.164 lookups ---");
    for number in [4566118311u64, 38340118311, 14412921234, 12024561111, 0] {
        let country = E164.lookup(number);
        println!("{number:>15} -> {:?}", country);
    }
    println!("{:>15} -> {:?}", "\"37740118311\"", E164.lookup_str("37740118311"));
    println!("{:>15} -> {:?}", "b\"1204\"", E164.lookup_bytes(b"1204"));
    println!();

    // Example 2: One buffer, many numbers
    println!("--- Example 2: Preallocated buffer ---");
    let mut buf = Vec::with_capacity(16);
    for number in [4512345678u64, 4779012345, 441624123456] {
        buf.clear();
        let digits = append_u64(&mut buf, number);
        println!(
            "{} -> {}",
            String::from_utf8_lossy(digits),
            E164.lookup_bytes(digits)
        );
    }
    println!();

    // Example 3: Network codes
    println!("--- Example 3: E.212 lookups ---");
    for (mcc, mnc) in [(238u16, 1u16), (238, 0), (340, 1), (340, 12), (0, 0)] {
        println!(
            "{mcc}-{mnc:02}: country {:?}, operator {:?}",
            E212.lookup(mcc, mnc),
            network_name(mcc, mnc)
        );
    }
    println!();

    // Example 4: Statistics
    println!("--- Example 4: Database statistics ---");
    let db = PhoneDb::global();
    let stats = db.stats();
    println!("Dataset version: {}", db.version());
    println!("Prefixes: {}, exceptions: {}", stats.prefixes, stats.exceptions);
    println!("MCCs: {}, networks: {}", stats.mccs, stats.networks);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
