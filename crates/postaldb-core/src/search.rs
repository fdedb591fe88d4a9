// crates/postaldb-core/src/search.rs
use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::common::DbStats;
use crate::error::Result;
use crate::geomath;
use crate::model::{DistanceUnit, GeoRect, Place, PostalDb};
use crate::traits::PostalSearch;

impl PostalSearch for PostalDb {
    fn stats(&self) -> DbStats {
        let countries: HashSet<&str> = self.as_slice().iter().map(Place::country_code).collect();
        DbStats {
            places: self.size(),
            countries: countries.len(),
        }
    }

    fn size(&self) -> usize {
        self.as_slice().len()
    }

    fn places(&self) -> &[Place] {
        self.as_slice()
    }

    fn within_distance(&self, latitude: f64, longitude: f64, radius: f64, unit: DistanceUnit) -> Vec<&Place> {
        let rect = self.bounding_box(latitude, longitude, radius, unit);

        // The box throws out almost everything cheaply; the trig check below
        // only runs on what is left.
        self.as_slice()
            .iter()
            .filter(|p| rect.contains_place(p))
            .filter(|p| {
                self.distance_between_coords(latitude, longitude, p.latitude(), p.longitude(), unit) <= radius
            })
            .collect()
    }

    fn by_postal_code(&self, pattern: &str) -> Result<Vec<&Place>> {
        let re = full_match_regex(pattern)?;
        Ok(self
            .as_slice()
            .iter()
            .filter(|p| re.is_match(p.postal_code()))
            .collect())
    }

    fn by_name(&self, pattern: &str) -> Result<Vec<&Place>> {
        let re = full_match_regex(pattern)?;
        Ok(self
            .as_slice()
            .iter()
            .filter(|p| re.is_match(p.place_name()))
            .collect())
    }

    fn by_country(&self, country_code: &str) -> Vec<&Place> {
        let code = country_code.trim();
        self.as_slice()
            .iter()
            .filter(|p| p.country_code().eq_ignore_ascii_case(code))
            .collect()
    }

    fn distance_between_coords(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
        geomath::great_circle_distance(lat1, lon1, lat2, lon2) * unit.earth_radius()
    }

    fn bounding_box(&self, latitude: f64, longitude: f64, radius: f64, unit: DistanceUnit) -> GeoRect {
        // Length of one arc degree in the requested unit
        let lat_length = geomath::lat_arc_degree_length(latitude, unit.earth_radius());
        let lon_length = geomath::lon_arc_degree_length(latitude, unit.earth_radius());

        // How many degrees the radius spans at this latitude
        let lat_delta = radius / lat_length;
        let lon_delta = radius / lon_length;

        GeoRect::new(
            latitude + lat_delta,
            longitude - lon_delta,
            latitude - lat_delta,
            longitude + lon_delta,
        )
    }
}

/// Compile `pattern` so it only matches whole strings, ignoring case.
///
/// Case folding follows Unicode simple case folding, so `ü` matches `Ü` and
/// `k` matches the Kelvin sign, not only ASCII letters.
///
/// The bare pattern is compiled first: wrapping an unbalanced pattern such as
/// `a)|(b` would otherwise parse and silently lose the anchors.
fn full_match_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build()?;
    let re = RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
        .case_insensitive(true)
        .build()?;
    Ok(re)
}
