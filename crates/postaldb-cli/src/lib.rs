//! postaldb-cli
//! ============
//!
//! The `postaldb` binary: load GeoNames postal exports and query them from a
//! shell. Everything it does goes through the public API of `postaldb-core`,
//! so use that crate directly when embedding the database in a program.
//!
//! ```text
//! postaldb -i US.txt near 41.3612 -75.2522 15
//! postaldb -i US.txt -i CA.txt.gz --filter CA name 'ottawa.*' --format json
//! postaldb -i US.txt distance 18431 10001 --unit km
//! ```
//!
//! Results go to stdout (`--format text|json|tsv`); logs go to stderr and
//! follow `RUST_LOG`.
