//! Basic usage example for volcano-rs
//!
//! This example demonstrates how to:
//! - Load the bundled eruption dataset
//! - Filter eruptions by year, VEI and elevation
//! - Compute the percentage and average summaries
//! - Rank eruptions by death toll

use volcano_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== volcano-rs Basic Usage Example ===\n");

    println!("Loading eruption dataset...");
    let mut db = VolcanoDataset::new();
    db.load(None)?;
    println!("✓ Loaded {} eruptions\n", db.count()?);

    println!("--- Example 1: Eruptions of the 1980s ---");
    for v in db.erupted_in_eighties()? {
        println!("{} ({}) in {}", v.name(), v.year(), v.country());
    }
    println!();

    println!("--- Example 2: VEI 6 or more ---");
    println!("{}\n", db.high_vei_names()?.join(", "));

    println!("--- Example 3: Summaries ---");
    println!("Caused a tsunami: {:.1}%", db.percent_causing_tsunami()?);
    println!("Northern hemisphere: {:.1}%", db.percent_in_northern_hemisphere()?);
    println!("Average elevation: {:.0} m", db.average_elevation()?);
    if let Some(kind) = db.most_common_type()? {
        println!("Most common type: {kind}");
    }
    println!("Eruptions in Indonesia: {}", db.eruption_count_by_country("indonesia")?);
    println!();

    println!("--- Example 4: Combined filter ---");
    let criteria = MatchCriteria::new(1900, "", 0.0, 5);
    println!("{}\n", db.names_matching_all_of(&criteria)?.join(", "));

    println!("--- Example 5: Deadliest eruptions ---");
    for (rank, v) in db.deadliest(5)?.into_iter().enumerate() {
        println!("{}. {} ({}): {} deaths", rank + 1, v.name(), v.year(), v.deaths());
    }
    println!(
        "Agents of death, ten deadliest: {}",
        db.agents_of_death_for_ten_deadliest()?.join(",")
    );

    Ok(())
}
