//! Radius search example for postaldb-rs
//!
//! This example demonstrates how to:
//! - Build a database from in-memory GeoNames lines
//! - Run radius searches in miles and kilometers
//! - Match postal codes and names by regex
//! - Share one lazily built database

use postaldb_rs::prelude::*;

const PENNSYLVANIA: &str = "\
US\t18431\tLakewood\tPennsylvania\tPA\tWayne\t127\t\t\t41.3612\t-75.2522\t4
US\t18430\tLake Ariel\tPennsylvania\tPA\tWayne\t127\t\t\t41.4345\t-75.2065\t4
US\t18436\tLake Como\tPennsylvania\tPA\tWayne\t127\t\t\t41.8542\t-75.3213\t4
US\t18436\tLake Como\tPennsylvania\tPA\tWayne\t127\t\t\t41.8542\t-75.3213\t4
US\tbroken line
";

const NEW_YORK: &str = "\
US\t10001\tNew York\tNew York\tNY\tNew York\t061\t\t\t40.7484\t-73.9967\t4
";

fn main() -> anyhow::Result<()> {
    println!("=== postaldb-rs Radius Search Example ===\n");

    let sources = [
        ReaderSource::from_static("pennsylvania", PENNSYLVANIA),
        ReaderSource::from_static("new-york", NEW_YORK),
    ];
    let (db, report) = build_with_report(&sources);
    println!(
        "Loaded {} places ({} duplicates dropped, {} bad lines skipped)\n",
        db.size(),
        report.duplicates,
        report.lines_skipped
    );

    // Example 1: radius around a postal code
    println!("--- Example 1: within 15 miles of 18431 ---");
    let lakewood = db
        .by_postal_code("18431")?
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("18431 not loaded"))?;
    for place in db.within_miles_of_place(lakewood, 15.0) {
        println!(
            "{} {} ({:.1} mi)",
            place.postal_code(),
            place.place_name(),
            db.distance_between(lakewood, place, DistanceUnit::Miles)
        );
    }
    println!();

    // Example 2: same origin, kilometers
    println!("--- Example 2: within 100 km of 41.3612,-75.2522 ---");
    for place in db.within_kilometers_of(41.3612, -75.2522, 100.0) {
        println!("{} {}", place.postal_code(), place.place_name());
    }
    println!();

    // Example 3: regex lookups are full match and case-insensitive
    println!("--- Example 3: pattern search ---");
    println!("postal '1843.': {}", db.by_postal_code("1843.")?.len());
    println!("name 'lake': {}", db.by_name("lake")?.len());
    println!("name 'LAKE.*': {}", db.by_name("LAKE.*")?.len());
    if let Err(e) = db.by_name("lake(") {
        println!("name 'lake(': {e}");
    }
    println!();

    // Example 4: distance and bearing
    println!("--- Example 4: Lakewood to New York ---");
    let nyc = db
        .by_name("new york")?
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("New York not loaded"))?;
    println!("{:.1} mi", db.distance_between(lakewood, nyc, DistanceUnit::Miles));
    println!("{:.1} km", db.distance_between(lakewood, nyc, DistanceUnit::Kilometers));
    println!("bearing {:.3} rad", great_circle_direction(lakewood, nyc));
    println!();

    // Example 5: build on first use
    println!("--- Example 5: lazy database ---");
    let lazy = LazyPostalDb::new().with_source(ReaderSource::from_static("pennsylvania", PENNSYLVANIA));
    println!("initialized before first query: {}", lazy.is_initialized());
    println!("places: {}", lazy.get().size());
    println!("initialized after first query: {}", lazy.is_initialized());

    Ok(())
}
