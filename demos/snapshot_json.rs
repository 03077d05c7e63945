//! Example: moving a DEPQ between processes as JSON.
//!
//! Run with: cargo run --example snapshot_json --features serde

use depq::{Depq, DepqState};

fn main() -> Result<(), serde_json::Error> {
    let depq = Depq::with_start(0_i64);
    depq.set_max_length(Some(4));
    for (item, priority) in [("ingest", 3), ("compact", 1), ("ingest", 7), ("serve", 5)] {
        depq.insert(item.to_string(), priority);
    }

    let json = serde_json::to_string_pretty(&depq.export_state())?;
    println!("exported:\n{json}\n");

    let state: DepqState<String, i64> = serde_json::from_str(&json)?;
    let restored = Depq::import_state(state);
    println!("restored: {restored}");
    println!("count(ingest) = {}", restored.count("ingest"));
    println!(
        "invariants hold: {}",
        restored.check_invariants().is_ok()
    );

    Ok(())
}
