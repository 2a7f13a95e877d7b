//! Error handling example for volcano-rs
//!
//! This example demonstrates the three failure modes and the empty dataset.

use volcano_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== volcano-rs Error Handling Example ===\n");

    // Example 1: Querying before loading
    println!("--- Example 1: Query before load ---");
    let mut db = VolcanoDataset::new();
    match db.count() {
        Ok(n) => println!("  Unexpected: {n} eruptions"),
        Err(e) => println!("  ✓ {e}"),
    }
    println!();

    // Example 2: Missing source
    println!("--- Example 2: Missing source ---");
    match db.load_from("no-such-file.json") {
        Ok(()) => println!("  Unexpected: loaded"),
        Err(e @ VolcanoError::SourceNotFound { .. }) => println!("  ✓ {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Malformed records
    println!("--- Example 3: Malformed JSON ---");
    match VolcanoDataset::from_json_str(r#"[{"Name": "Etna", "Year": "long ago"}]"#) {
        Ok(_) => println!("  Unexpected: parsed"),
        Err(e) => println!("  ✓ {e}"),
    }
    println!();

    // Example 4: A failed reload keeps the previous collection
    println!("--- Example 4: Failed reload ---");
    db.load(None)?;
    let before = db.count()?;
    match db.load_from("still-missing.json") {
        Ok(()) => println!("  Unexpected: loaded"),
        Err(e) => println!("  ✓ {e}"),
    }
    println!("  ✓ Still {} eruptions (was {before})", db.count()?);
    println!();

    // Example 5: Empty datasets have defined aggregates
    println!("--- Example 5: Empty dataset ---");
    let empty = VolcanoDataset::from_json_str("[]")?;
    println!("  Tsunami share: {}", empty.percent_causing_tsunami()?);
    println!("  Average elevation: {}", empty.average_elevation()?);
    println!("  Most common type: {:?}", empty.most_common_type()?);

    Ok(())
}
