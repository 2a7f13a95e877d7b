//! volcano-cli — Command-line interface for volcano-core
//!
//! Loads an eruption dataset once and prints the answer to one query.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ volcano stats
//!
//! - Eruptions of the 1980s
//!   $ volcano range 1980 1990
//!
//! - Names of VEI >= 6 eruptions from a custom file
//!   $ volcano --input eruptions.json vei 6
//!
//! - Agents of death of the ten deadliest eruptions, as JSON
//!   $ volcano --json top
//!
//! Data source
//! -----------
//!
//! Without `--input` the CLI loads the `volcano.json` bundled with
//! `volcano-core`. `--input -` reads the dataset from stdin.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use volcano_core::{MatchCriteria, VolcanoDataset};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn load(input: Option<&str>) -> Result<VolcanoDataset> {
    if input == Some("-") {
        debug!("reading dataset from stdin");
        return VolcanoDataset::from_reader(std::io::stdin().lock())
            .context("Failed to read dataset from stdin");
    }

    let mut db = VolcanoDataset::new();
    db.load(input.map(Path::new)).with_context(|| {
        format!(
            "Failed to load dataset {}",
            input.unwrap_or(VolcanoDataset::default_source())
        )
    })?;
    Ok(db)
}

/// Prints `value` as pretty JSON, or runs the plain-text printer.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_lines(items: &[&str]) {
    for item in items {
        println!("{item}");
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose)?;

    let db = load(args.input.as_deref())?;
    let json = args.json;

    match args.command {
        Commands::Stats => emit(json, &db.stats()?, |s| {
            println!("Dataset statistics:");
            println!("  Eruptions: {}", s.eruptions);
            println!("  Types: {}", s.types);
            println!("  Countries: {}", s.countries);
            println!("  Deaths: {}", s.total_deaths);
        })?,

        Commands::Range { start, end } => {
            emit(json, &db.erupted_in_range(start, end)?, |hits| {
                if hits.is_empty() {
                    println!("No eruptions in [{start}, {end})");
                }
                for v in hits {
                    println!("{} ({}) — {}, VEI {}", v.name(), v.year(), v.country(), v.vei());
                }
            })?
        }

        Commands::Vei { threshold } => {
            emit(json, &db.names_with_minimum_vei(threshold)?, |names| print_lines(names))?
        }

        Commands::Tsunami => emit(json, &db.percent_causing_tsunami()?, |p| {
            println!("{p:.2}% of eruptions caused a tsunami")
        })?,

        Commands::CommonType => emit(json, &db.most_common_type()?, |kind| match kind {
            Some(kind) => println!("{kind}"),
            None => eprintln!("Dataset is empty"),
        })?,

        Commands::Types => emit(json, &db.count_by_type()?, |counts| {
            for (kind, n) in counts {
                println!("{kind}: {n}");
            }
        })?,

        Commands::Country { name } => {
            emit(json, &db.eruption_count_by_country(&name)?, |n| {
                println!("{n} eruptions in {name}")
            })?
        }

        Commands::Elevation => emit(json, &db.average_elevation()?, |m| {
            println!("Average elevation: {m:.1} m")
        })?,

        Commands::Above { min_elevation } => {
            emit(json, &db.names_above_elevation(min_elevation)?, |names| {
                print_lines(names)
            })?
        }

        Commands::North => emit(json, &db.percent_in_northern_hemisphere()?, |p| {
            println!("{p:.2}% of eruptions were in the northern hemisphere")
        })?,

        Commands::Filter {
            year_after,
            tsunami,
            latitude_below,
            vei,
        } => {
            let criteria = MatchCriteria::new(year_after, tsunami, latitude_below, vei);
            debug!(?criteria, "combined filter");
            emit(json, &db.names_matching_all_of(&criteria)?, |names| {
                print_lines(names)
            })?
        }

        Commands::Deadliest => {
            emit(json, &db.agents_of_death_for_deadliest_eruption()?, |agents| {
                match db.deadliest_eruption().ok().flatten() {
                    Some(v) => println!("{} ({}): {} deaths", v.name(), v.year(), v.deaths()),
                    None => println!("Dataset is empty"),
                }
                print_lines(agents);
            })?
        }

        Commands::Top { n } => {
            emit(json, &db.agents_of_death_for_top_n_deadliest(n)?, |agents| {
                print_lines(agents)
            })?
        }

        Commands::Find { query } => emit(json, &db.find_by_name(&query)?, |hits| {
            if hits.is_empty() {
                println!("No volcanoes found matching: {query}");
            }
            for v in hits {
                println!("{} ({}) — {}", v.name(), v.year(), v.country());
            }
        })?,
    }

    Ok(())
}
