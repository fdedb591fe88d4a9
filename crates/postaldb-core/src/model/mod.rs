// crates/postaldb-core/src/model/mod.rs
mod geo;
mod place;

pub use geo::{DistanceUnit, GeoRect};
pub use place::Place;

use std::collections::HashSet;

/// The master database struct.
///
/// Holds every unique [`Place`] in load order. Built once (see
/// [`crate::loader::build`]) and read-only afterwards, so a single instance
/// can be shared between threads by reference or behind an `Arc`.
/// Queries live on the [`crate::traits::PostalSearch`] trait.
#[derive(Clone, Debug, Default)]
pub struct PostalDb {
    places: Vec<Place>,
}

impl PostalDb {
    /// Wrap an already deduplicated list of places.
    pub(crate) fn new(places: Vec<Place>) -> Self {
        tracing::info!(count = places.len(), "Initialized postal database");
        Self { places }
    }

    /// Build a database from arbitrary places, dropping later duplicates.
    pub fn from_places<I: IntoIterator<Item = Place>>(places: I) -> Self {
        let mut seen = HashSet::new();
        let unique = places
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        Self::new(unique)
    }

    /// Keep only the places matching `keep`, in their current order.
    ///
    /// Consumes the database, so nothing shared with other readers changes.
    pub fn retain<F: FnMut(&Place) -> bool>(mut self, keep: F) -> Self {
        let before = self.places.len();
        self.places.retain(keep);
        tracing::debug!(before, after = self.places.len(), "Filtered postal database");
        self
    }

    pub(crate) fn as_slice(&self) -> &[Place] {
        &self.places
    }
}

impl FromIterator<Place> for PostalDb {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        Self::from_places(iter)
    }
}
