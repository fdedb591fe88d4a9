//! postaldb prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::common::DbStats;
pub use crate::error::{ParseError, PostalError, Result};
pub use crate::geomath::{great_circle_direction, great_circle_distance};
pub use crate::loader::{build, build_with_report, FileSource, LazyPostalDb, LoadReport, ReaderSource};
pub use crate::model::{DistanceUnit, GeoRect, Place, PostalDb};
pub use crate::parser::parse_line;
pub use crate::traits::{PostalSearch, PostalSource};
