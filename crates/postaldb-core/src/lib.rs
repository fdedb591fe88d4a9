// crates/postaldb-core/src/lib.rs

//! # postaldb-core
//!
//! An in-memory postal code database built from GeoNames postal exports.
//! Answers "which places lie within R of this point?" and "which places match
//! this postal code / name pattern?".
//!
//! ```no_run
//! use postaldb_core::prelude::*;
//!
//! let sources = vec![FileSource::new("data/US.txt")];
//! let db = build(&sources);
//!
//! for place in db.within_miles_of(41.3612, -75.2522, 15.0) {
//!     println!("{} {}", place.postal_code(), place.place_name());
//! }
//! ```

pub mod common;
pub mod error;
pub mod geomath;
pub mod loader;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod search;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{ParseError, PostalError, Result};
pub use crate::loader::{build, build_with_report, FileSource, LazyPostalDb, LoadReport, ReaderSource};
pub use crate::model::{DistanceUnit, GeoRect, Place, PostalDb};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{PostalSearch, PostalSource};
