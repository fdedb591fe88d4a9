// crates/postaldb-core/src/model/geo.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Place;

/// Unit of length used by radius and distance queries.
///
/// Each unit carries the Earth radius used both to size the bounding box and
/// to turn great-circle angles into lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub const RADIUS_IN_MILES: f64 = 3963.191;
    pub const RADIUS_IN_KILOMETERS: f64 = 6378.137;

    /// Earth radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => Self::RADIUS_IN_MILES,
            DistanceUnit::Kilometers => Self::RADIUS_IN_KILOMETERS,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Accepts `mi`, `mile`, `miles`, `km`, `kilometer(s)`, `kilometre(s)`; any case.
impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(DistanceUnit::Kilometers)
            }
            other => Err(format!("unknown distance unit: {other:?} (expected mi or km)")),
        }
    }
}

/// Latitude/longitude rectangle used to prefilter radius searches.
///
/// Built per query and thrown away; `top_left` is the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
}

impl GeoRect {
    pub fn new(top_left_lat: f64, top_left_lon: f64, bottom_right_lat: f64, bottom_right_lon: f64) -> Self {
        Self {
            top_left_lat,
            top_left_lon,
            bottom_right_lat,
            bottom_right_lon,
        }
    }

    pub fn top_left_lat(&self) -> f64 {
        self.top_left_lat
    }

    pub fn top_left_lon(&self) -> f64 {
        self.top_left_lon
    }

    pub fn bottom_right_lat(&self) -> f64 {
        self.bottom_right_lat
    }

    pub fn bottom_right_lon(&self) -> f64 {
        self.bottom_right_lon
    }

    /// Strict containment: points exactly on an edge are outside.
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.top_left_lat > latitude && latitude > self.bottom_right_lat)
            && (self.top_left_lon < longitude && longitude < self.bottom_right_lon)
    }

    #[inline]
    pub fn contains_place(&self, place: &Place) -> bool {
        self.contains(place.latitude(), place.longitude())
    }
}
