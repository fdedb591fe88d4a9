// crates/postaldb-core/src/error.rs
use thiserror::Error;

/// Error produced when a single GeoNames line cannot be turned into a [`Place`].
///
/// [`Place`]: crate::model::Place
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 11 tab-separated fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Top-level error type for the postal database.
#[derive(Debug, Error)]
pub enum PostalError {
    #[error("Malformed line: {0}")]
    Parse(#[from] ParseError),

    #[error("Could not read source {source_name}: {source}")]
    SourceRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T, E = PostalError> = std::result::Result<T, E>;
