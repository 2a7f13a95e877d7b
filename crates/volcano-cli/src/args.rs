use clap::{Parser, Subcommand};

/// CLI arguments for volcano-cli
#[derive(Debug, Parser)]
#[command(
    name = "volcano",
    version,
    about = "Descriptive statistics over a volcano eruption dataset"
)]
pub struct CliArgs {
    /// Path to the dataset (default: the bundled volcano.json). Use `-` for stdin.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List eruptions with start <= year < end
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i32,
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },

    /// Names of eruptions with at least the given VEI
    Vei {
        #[arg(default_value_t = 6)]
        threshold: i32,
    },

    /// Percentage of eruptions that caused a tsunami
    Tsunami,

    /// The most common volcano type
    CommonType,

    /// Every volcano type, with its number of eruptions
    Types,

    /// Number of eruptions in a country (case-insensitive)
    Country { name: String },

    /// Mean elevation in metres
    Elevation,

    /// Names of volcanoes higher than the given elevation
    Above {
        #[arg(allow_negative_numbers = true)]
        min_elevation: f64,
    },

    /// Percentage of eruptions north of the equator
    North,

    /// Names matching every bound at once
    Filter {
        /// Keep eruptions strictly after this year
        #[arg(long, default_value_t = 1800, allow_negative_numbers = true)]
        year_after: i32,
        /// Exact tsunami flag ("tsu" or "")
        #[arg(long, default_value = "")]
        tsunami: String,
        /// Keep eruptions strictly south of this latitude
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        latitude_below: f64,
        /// Exact VEI
        #[arg(long, default_value_t = 5)]
        vei: i32,
    },

    /// Agents of death of the deadliest eruption
    Deadliest,

    /// Agents of death of the N deadliest eruptions
    Top {
        #[arg(default_value_t = volcano_core::DEFAULT_TOP_N)]
        n: usize,
    },

    /// Search eruptions by volcano name
    Find { query: String },
}
