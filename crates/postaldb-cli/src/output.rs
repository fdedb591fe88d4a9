use crate::args::OutputFormat;
use postaldb_core::{DbStats, DistanceUnit, Place};
use serde::Serialize;
use std::fmt::Write as _;

/// A place in a result listing, optionally with its distance from the query origin.
#[derive(Debug, Serialize)]
pub struct Hit<'a> {
    #[serde(flatten)]
    pub place: &'a Place,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl<'a> Hit<'a> {
    pub fn bare(place: &'a Place) -> Self {
        Self { place, distance: None }
    }

    pub fn at(place: &'a Place, distance: f64) -> Self {
        Self {
            place,
            distance: Some(distance),
        }
    }
}

pub fn render_places(hits: &[Hit<'_>], unit: Option<DistanceUnit>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(hits)? + "\n"),
        OutputFormat::Tsv => Ok(hits.iter().map(|h| h.place.to_line() + "\n").collect()),
        OutputFormat::Text => {
            if hits.is_empty() {
                return Ok("No places found\n".to_string());
            }
            let mut out = String::new();
            for hit in hits {
                out.push_str(&describe(hit.place));
                if let (Some(d), Some(unit)) = (hit.distance, unit) {
                    write!(out, "  {d:.2} {unit}")?;
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn render_stats(stats: &DbStats, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)? + "\n"),
        OutputFormat::Tsv => Ok(format!("places\t{}\ncountries\t{}\n", stats.places, stats.countries)),
        OutputFormat::Text => Ok(format!(
            "Database statistics:\n  Places: {}\n  Countries: {}\n",
            stats.places, stats.countries
        )),
    }
}

pub fn render_distance(from: &Place, to: &Place, distance: f64, unit: DistanceUnit, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": from,
                "to": to,
                "distance": distance,
                "unit": unit,
            });
            Ok(serde_json::to_string_pretty(&value)? + "\n")
        }
        OutputFormat::Tsv => Ok(format!(
            "{}\t{}\t{distance}\t{unit}\n",
            from.postal_code(),
            to.postal_code()
        )),
        OutputFormat::Text => Ok(format!(
            "{}\n{}\n  {distance:.2} {unit}\n",
            describe(from),
            describe(to)
        )),
    }
}

/// `18431  Lakewood, PA (US)  41.3612,-75.2522`
fn describe(place: &Place) -> String {
    let region = place
        .admin_code1()
        .or(place.admin_name1())
        .map(|r| format!(", {r}"))
        .unwrap_or_default();
    format!(
        "{}  {}{} ({})  {:.4},{:.4}",
        place.postal_code(),
        place.place_name(),
        region,
        place.country_code(),
        place.latitude(),
        place.longitude()
    )
}
