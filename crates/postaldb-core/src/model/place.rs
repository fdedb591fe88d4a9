// crates/postaldb-core/src/model/place.rs
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One postal location record from a GeoNames postal export.
///
/// A `Place` is a value: fields are only readable, and two places built from
/// the same source line compare equal (coordinates are compared bit for bit).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    country_code: String,
    postal_code: String,
    place_name: String,
    admin_name1: String,
    admin_code1: String,
    admin_name2: String,
    admin_code2: String,
    admin_name3: String,
    admin_code3: String,
    latitude: f64,
    longitude: f64,
    accuracy: Option<i32>,
}

impl Place {
    /// Create a place with no subdivisions and no accuracy code.
    ///
    /// Use the `with_*` methods to fill in the rest.
    pub fn new(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        place_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            place_name: place_name.into(),
            admin_name1: String::new(),
            admin_code1: String::new(),
            admin_name2: String::new(),
            admin_code2: String::new(),
            admin_name3: String::new(),
            admin_code3: String::new(),
            latitude,
            longitude,
            accuracy: None,
        }
    }

    /// Full constructor in GeoNames column order.
    pub(crate) fn from_columns(
        [country_code, postal_code, place_name, admin_name1, admin_code1, admin_name2, admin_code2, admin_name3, admin_code3]: [&str; 9],
        latitude: f64,
        longitude: f64,
        accuracy: Option<i32>,
    ) -> Self {
        Self {
            country_code: country_code.to_owned(),
            postal_code: postal_code.to_owned(),
            place_name: place_name.to_owned(),
            admin_name1: admin_name1.to_owned(),
            admin_code1: admin_code1.to_owned(),
            admin_name2: admin_name2.to_owned(),
            admin_code2: admin_code2.to_owned(),
            admin_name3: admin_name3.to_owned(),
            admin_code3: admin_code3.to_owned(),
            latitude,
            longitude,
            accuracy,
        }
    }

    /// State / first-order subdivision.
    pub fn with_admin1(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.admin_name1 = name.into();
        self.admin_code1 = code.into();
        self
    }

    /// County / province.
    pub fn with_admin2(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.admin_name2 = name.into();
        self.admin_code2 = code.into();
        self
    }

    /// Community.
    pub fn with_admin3(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.admin_name3 = name.into();
        self.admin_code3 = code.into();
        self
    }

    pub fn with_accuracy(mut self, accuracy: i32) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn place_name(&self) -> &str {
        &self.place_name
    }

    pub fn admin_name1(&self) -> Option<&str> {
        non_empty(&self.admin_name1)
    }

    pub fn admin_code1(&self) -> Option<&str> {
        non_empty(&self.admin_code1)
    }

    pub fn admin_name2(&self) -> Option<&str> {
        non_empty(&self.admin_name2)
    }

    pub fn admin_code2(&self) -> Option<&str> {
        non_empty(&self.admin_code2)
    }

    pub fn admin_name3(&self) -> Option<&str> {
        non_empty(&self.admin_name3)
    }

    pub fn admin_code3(&self) -> Option<&str> {
        non_empty(&self.admin_code3)
    }

    /// Latitude in decimal degrees (WGS84).
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees (WGS84).
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// GeoNames accuracy code: 1 = estimated, 4 = geonameid, 6 = centroid.
    pub fn accuracy(&self) -> Option<i32> {
        self.accuracy
    }

    /// Render the record back into a GeoNames tab-separated line.
    pub fn to_line(&self) -> String {
        let accuracy = self.accuracy.map(|a| a.to_string()).unwrap_or_default();
        [
            self.country_code.as_str(),
            self.postal_code.as_str(),
            self.place_name.as_str(),
            self.admin_name1.as_str(),
            self.admin_code1.as_str(),
            self.admin_name2.as_str(),
            self.admin_code2.as_str(),
            self.admin_name3.as_str(),
            self.admin_code3.as_str(),
            self.latitude.to_string().as_str(),
            self.longitude.to_string().as_str(),
            accuracy.as_str(),
        ]
        .join("\t")
    }

    fn key(&self) -> (&str, &str, &str, [&str; 6], u64, u64, Option<i32>) {
        (
            self.country_code.as_str(),
            self.postal_code.as_str(),
            self.place_name.as_str(),
            [
                self.admin_name1.as_str(),
                self.admin_code1.as_str(),
                self.admin_name2.as_str(),
                self.admin_code2.as_str(),
                self.admin_name3.as_str(),
                self.admin_code3.as_str(),
            ],
            self.latitude.to_bits(),
            self.longitude.to_bits(),
            self.accuracy,
        )
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
