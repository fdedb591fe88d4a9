// crates/postaldb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::traits::PostalSearch::stats`]; counts reflect the
/// deduplicated in-memory database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub places: usize,
    pub countries: usize,
}
