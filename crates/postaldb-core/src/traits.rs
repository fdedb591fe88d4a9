// crates/postaldb-core/src/traits.rs
use crate::common::DbStats;
use crate::error::Result;
use crate::model::{DistanceUnit, GeoRect, Place};
use std::io::Read;

/// A provider of raw GeoNames postal data, typically one per country.
///
/// The embedding application decides which sources exist and hands them to
/// [`crate::loader::build`]; the loader never discovers sources by itself.
pub trait PostalSource {
    /// Human readable identifier used in diagnostics (a path, a country code).
    fn name(&self) -> String;

    /// Open a fresh stream over the dataset lines.
    fn open_stream(&self) -> std::io::Result<Box<dyn Read + Send>>;
}

impl<S: PostalSource + ?Sized> PostalSource for Box<S> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn open_stream(&self) -> std::io::Result<Box<dyn Read + Send>> {
        (**self).open_stream()
    }
}

/// Read-only queries over a postal database.
///
/// Every method takes `&self`; results borrow from the database and come
/// back in load order.
pub trait PostalSearch {
    fn stats(&self) -> DbStats;

    /// Number of places stored.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All places in load order.
    fn places(&self) -> &[Place];

    /// All places within `radius` of the given coordinates.
    ///
    /// Runs a bounding-box reject pass first and confirms the survivors with
    /// the exact great-circle distance.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use postaldb_core::prelude::*;
    ///
    /// let db = build(&[FileSource::new("data/US.txt")]);
    /// let nearby = db.within_distance(41.3612, -75.2522, 15.0, DistanceUnit::Miles);
    /// println!("{} places within 15 miles", nearby.len());
    /// ```
    fn within_distance(&self, latitude: f64, longitude: f64, radius: f64, unit: DistanceUnit) -> Vec<&Place>;

    /// [`PostalSearch::within_distance`] with a place as the origin.
    fn within_distance_of(&self, origin: &Place, radius: f64, unit: DistanceUnit) -> Vec<&Place> {
        self.within_distance(origin.latitude(), origin.longitude(), radius, unit)
    }

    fn within_miles_of(&self, latitude: f64, longitude: f64, miles: f64) -> Vec<&Place> {
        self.within_distance(latitude, longitude, miles, DistanceUnit::Miles)
    }

    fn within_miles_of_place(&self, origin: &Place, miles: f64) -> Vec<&Place> {
        self.within_distance_of(origin, miles, DistanceUnit::Miles)
    }

    fn within_kilometers_of(&self, latitude: f64, longitude: f64, kilometers: f64) -> Vec<&Place> {
        self.within_distance(latitude, longitude, kilometers, DistanceUnit::Kilometers)
    }

    fn within_kilometers_of_place(&self, origin: &Place, kilometers: f64) -> Vec<&Place> {
        self.within_distance_of(origin, kilometers, DistanceUnit::Kilometers)
    }

    /// Places whose postal code fully matches `pattern`, ignoring case.
    ///
    /// The pattern must match the whole code: `"184"` does not find `"18431"`,
    /// `"184.*"` does.
    fn by_postal_code(&self, pattern: &str) -> Result<Vec<&Place>>;

    /// Places whose name fully matches `pattern`, ignoring case.
    fn by_name(&self, pattern: &str) -> Result<Vec<&Place>>;

    /// Places in the given ISO2 country (ASCII case-insensitive).
    fn by_country(&self, country_code: &str) -> Vec<&Place>;

    /// Great-circle distance between two places.
    fn distance_between(&self, p1: &Place, p2: &Place, unit: DistanceUnit) -> f64 {
        self.distance_between_coords(p1.latitude(), p1.longitude(), p2.latitude(), p2.longitude(), unit)
    }

    /// Great-circle distance between two coordinates.
    fn distance_between_coords(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64;

    /// The prefilter rectangle around an origin for the given radius.
    fn bounding_box(&self, latitude: f64, longitude: f64, radius: f64, unit: DistanceUnit) -> GeoRect;
}
