//! Example demonstrating the four queue disciplines of a DEPQ.
//!
//! Run with: cargo run --example basic_depq

use depq::{Depq, DepqBuilder, DepqError};

fn main() -> Result<(), DepqError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== DEPQ Examples ===\n");

    // Example 1: sorted insertion
    println!("1. Sorted insertion");
    let depq = Depq::new();
    depq.insert("A", 4);
    depq.insert("A", 6);
    depq.insert("A", 5);
    println!("   contents: {depq}");
    println!("   high = {}, low = {}", depq.high()?, depq.low()?);
    println!();

    // Example 2: max- and min-priority queue from the same container
    println!("2. Both ends");
    let depq: Depq<&str, u32> = [("write", 2), ("read", 5), ("flush", 1), ("sync", 3)]
        .into_iter()
        .collect();
    println!("   popfirst -> {:?} (highest)", depq.popfirst()?);
    println!("   poplast  -> {:?} (lowest)", depq.poplast()?);
    println!("   remaining: {depq}");
    println!();

    // Example 3: FIFO and LIFO
    println!("3. FIFO / LIFO");
    let fifo: Depq<&str, u32> = Depq::new();
    let lifo: Depq<&str, u32> = Depq::new();
    for job in ["a", "b", "c"] {
        fifo.addlast(job, None)?;
        lifo.addfirst(job, None)?;
    }
    println!("   fifo pops {:?}", fifo.popfirst()?.0);
    println!("   lifo pops {:?}", lifo.popfirst()?.0);
    println!();

    // Example 4: bounded length
    println!("4. Bounded length (max 2)");
    let bounded = DepqBuilder::new().max_length(2).build();
    bounded.insert("A", 1);
    bounded.insert("B", 2);
    bounded.insert("C", 3);
    println!("   contents: {bounded}");
    println!("   contains A? {} (evicted)", bounded.contains(&"A"));
    println!();

    // Example 5: identity removal
    println!("5. Removal by item");
    let depq = Depq::new();
    depq.insert("t", 7);
    depq.insert("t", 5);
    depq.insert("u", 6);
    println!("   count(t) = {}", depq.count(&"t"));
    println!("   remove(t, 1) -> {:?}", depq.remove(&"t", 1)?);
    println!("   contents: {depq}");

    // Example 6: ordered pushes are checked
    println!();
    println!("6. Ordered pushes");
    let depq = Depq::new();
    depq.addfirst("x", Some(7))?;
    match depq.addfirst("y", Some(6)) {
        Ok(()) => println!("   unexpected success"),
        Err(err) => println!("   addfirst(y, 6) -> {err}"),
    }

    Ok(())
}
