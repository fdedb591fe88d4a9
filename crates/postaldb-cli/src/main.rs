//! postaldb-cli: command-line interface for postaldb-core
//!
//! Loads one or more GeoNames postal code exports into memory and answers
//! radius, pattern and distance queries against them.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ postaldb -i US.txt stats
//!
//! - Everything within 15 miles of a coordinate
//!   $ postaldb -i US.txt near 41.3612 -75.2522 15
//!
//! - Everything within 20 km of the first place with postal code 18431
//!   $ postaldb -i US.txt near-code 18431 20 --unit km
//!
//! - Postal codes and names by full-match regex (case-insensitive)
//!   $ postaldb -i US.txt postal '1843.'
//!   $ postaldb -i US.txt -i CA.txt.gz name 'lake.*' --format json
//!
//! - Distance between two postal codes
//!   $ postaldb -i US.txt distance 18431 10001
//!
//! Data source
//! -----------
//!
//! Without `--input`, every `.txt` / `.txt.gz` file in `./data` is loaded in
//! file-name order. `--filter <ISO2,ISO2,...>` keeps only the listed
//! countries. Log verbosity follows `RUST_LOG` (default `info`) and goes to
//! stderr so query output stays clean.
mod args;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use postaldb_core::{build_with_report, FileSource, Place, PostalDb, PostalSearch};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{CliArgs, Commands};
use crate::output::{render_distance, render_places, render_stats, Hit};

const DEFAULT_DATA_DIR: &str = "data";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let inputs = if args.input.is_empty() {
        default_inputs(Path::new(DEFAULT_DATA_DIR))?
    } else {
        args.input.clone()
    };
    let sources: Vec<FileSource> = inputs.into_iter().map(FileSource::new).collect();

    let (db, report) = build_with_report(&sources);
    info!(
        loaded = report.sources_loaded,
        failed = report.sources_failed,
        places = db.size(),
        skipped_lines = report.lines_skipped,
        duplicates = report.duplicates,
        "Postal data ready"
    );
    if report.sources_loaded == 0 {
        bail!("none of the {} input file(s) could be read", sources.len());
    }

    // Parse filter if provided
    let iso_filter: Option<Vec<String>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim().to_ascii_uppercase())
            .filter(|x| !x.is_empty())
            .collect()
    });
    let db = match iso_filter {
        Some(codes) => filter_countries(db, &codes),
        None => db,
    };

    let format = args.format;
    let out = match args.command {
        Commands::Stats => render_stats(&db.stats(), format)?,

        Commands::Near {
            latitude,
            longitude,
            radius,
            unit,
        } => {
            let hits: Vec<Hit<'_>> = db
                .within_distance(latitude, longitude, radius, unit)
                .into_iter()
                .map(|p| Hit::at(p, db.distance_between_coords(latitude, longitude, p.latitude(), p.longitude(), unit)))
                .collect();
            render_places(&hits, Some(unit), format)?
        }

        Commands::NearCode {
            postal_code,
            radius,
            unit,
        } => {
            let origin = first_with_code(&db, &postal_code)?;
            let hits: Vec<Hit<'_>> = db
                .within_distance_of(origin, radius, unit)
                .into_iter()
                .map(|p| Hit::at(p, db.distance_between(origin, p, unit)))
                .collect();
            render_places(&hits, Some(unit), format)?
        }

        Commands::Postal { pattern } => {
            let found = db
                .by_postal_code(&pattern)
                .with_context(|| format!("bad postal code pattern {pattern:?}"))?;
            let hits: Vec<Hit<'_>> = found.into_iter().map(Hit::bare).collect();
            render_places(&hits, None, format)?
        }

        Commands::Name { pattern } => {
            let found = db
                .by_name(&pattern)
                .with_context(|| format!("bad place name pattern {pattern:?}"))?;
            let hits: Vec<Hit<'_>> = found.into_iter().map(Hit::bare).collect();
            render_places(&hits, None, format)?
        }

        Commands::Country { code } => {
            let hits: Vec<Hit<'_>> = db.by_country(&code).into_iter().map(Hit::bare).collect();
            render_places(&hits, None, format)?
        }

        Commands::Distance { from, to, unit } => {
            let a = first_with_code(&db, &from)?;
            let b = first_with_code(&db, &to)?;
            render_distance(a, b, db.distance_between(a, b, unit), unit, format)?
        }
    };

    print!("{out}");
    Ok(())
}

/// The origin for code-based queries is the first place loaded with that code.
fn first_with_code<'a>(db: &'a PostalDb, postal_code: &str) -> anyhow::Result<&'a Place> {
    db.places()
        .iter()
        .find(|p| p.postal_code().eq_ignore_ascii_case(postal_code))
        .with_context(|| format!("no place with postal code {postal_code:?}"))
}

fn filter_countries(db: PostalDb, codes: &[String]) -> PostalDb {
    db.retain(|p| codes.iter().any(|c| p.country_code().eq_ignore_ascii_case(c)))
}

fn default_inputs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("no --input given and default data dir {} is unreadable", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            name.ends_with(".txt") || name.ends_with(".txt.gz")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("no .txt or .txt.gz exports found in {}", dir.display());
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OutputFormat;
    use postaldb_core::DistanceUnit;
    use pretty_assertions::assert_eq;

    fn db() -> PostalDb {
        PostalDb::from_places([
            Place::new("US", "18431", "Lakewood", 41.3612, -75.2522),
            Place::new("US", "18430", "Lake Ariel", 41.4345, -75.2065),
            Place::new("CA", "K1A", "Ottawa", 45.4215, -75.6972),
        ])
    }

    #[test]
    fn parses_near_with_negative_longitude() {
        let args = CliArgs::try_parse_from(["postaldb", "-i", "US.txt", "near", "41.3612", "-75.2522", "15", "--unit", "km"])
            .unwrap();
        assert_eq!(args.input, vec![PathBuf::from("US.txt")]);
        match args.command {
            Commands::Near {
                latitude,
                longitude,
                radius,
                unit,
            } => {
                assert_eq!((latitude, longitude, radius), (41.3612, -75.2522, 15.0));
                assert_eq!(unit, DistanceUnit::Kilometers);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from(["postaldb", "postal", "1843.", "--format", "json", "-i", "a.txt", "-i", "b.txt.gz"])
            .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.input.len(), 2);
    }

    #[test]
    fn unit_defaults_to_miles_and_rejects_unknown() {
        let args = CliArgs::try_parse_from(["postaldb", "near-code", "18431", "10"]).unwrap();
        assert!(matches!(args.command, Commands::NearCode { unit: DistanceUnit::Miles, .. }));

        assert!(CliArgs::try_parse_from(["postaldb", "near-code", "18431", "10", "--unit", "furlongs"]).is_err());
    }

    #[test]
    fn country_filter_keeps_listed_codes() {
        let filtered = filter_countries(db(), &["CA".to_string(), "de".to_string()]);
        assert_eq!(filtered.size(), 1);
        assert_eq!(filtered.places()[0].place_name(), "Ottawa");
    }

    #[test]
    fn first_with_code_finds_origin() {
        let db = db();
        assert_eq!(first_with_code(&db, "18430").unwrap().place_name(), "Lake Ariel");
        assert!(first_with_code(&db, "99999").is_err());
    }
}
