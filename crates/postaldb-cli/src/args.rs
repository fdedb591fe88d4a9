use clap::{Parser, Subcommand, ValueEnum};
use postaldb_core::DistanceUnit;
use std::path::PathBuf;

/// CLI arguments for postaldb
#[derive(Debug, Parser)]
#[command(
    name = "postaldb",
    version,
    about = "Radius and pattern queries over GeoNames postal code exports"
)]
pub struct CliArgs {
    /// GeoNames postal export to load (.txt or .txt.gz). Repeat for several
    /// countries; defaults to every export found in ./data
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Vec<PathBuf>,

    /// Optional comma-separated list of ISO2 country codes to keep (e.g. US,CA)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per place
    Text,
    /// Pretty printed JSON array
    Json,
    /// GeoNames tab-separated lines
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded data
    Stats,

    /// Places within a radius of a coordinate
    Near {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        radius: f64,
        /// mi or km
        #[arg(short, long, default_value = "mi")]
        unit: DistanceUnit,
    },

    /// Places within a radius of the first place with the given postal code
    NearCode {
        postal_code: String,
        radius: f64,
        /// mi or km
        #[arg(short, long, default_value = "mi")]
        unit: DistanceUnit,
    },

    /// Places whose postal code fully matches a regex (case-insensitive)
    Postal { pattern: String },

    /// Places whose name fully matches a regex (case-insensitive)
    Name { pattern: String },

    /// All places of one country (ISO2)
    Country { code: String },

    /// Great-circle distance between the first places of two postal codes
    Distance {
        from: String,
        to: String,
        /// mi or km
        #[arg(short, long, default_value = "mi")]
        unit: DistanceUnit,
    },
}
