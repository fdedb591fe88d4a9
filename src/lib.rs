//! postaldb-rs: umbrella crate re-exporting [`postaldb_core`] so the demos
//! can `use postaldb_rs::prelude::*`.

pub use postaldb_core::*;
