// crates/postaldb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns a list of [`PostalSource`]s into a [`PostalDb`]. Handles the
//! physical layer (opening streams, decompression) and delegates each line
//! to [`crate::parser::parse_line`].
//!
//! Loading is forgiving: a malformed line is skipped, an unreadable source is
//! skipped, and the rest of the dataset still loads. If every source fails
//! the result is simply an empty database.

use std::collections::HashSet;
use std::io::{BufRead, BufReader};

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{PostalError, Result};
use crate::model::{Place, PostalDb};
use crate::parser;
use crate::traits::PostalSource;

mod common_io;
mod source;

pub use source::{FileSource, ReaderSource};

/// Counters collected while building a database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Sources read to the end.
    pub sources_loaded: usize,
    /// Sources that could not be opened or failed part way through.
    pub sources_failed: usize,
    /// Lines that produced a place (duplicates included).
    pub lines_parsed: usize,
    /// Non-blank lines that failed to parse.
    pub lines_skipped: usize,
    /// Parsed places dropped because an equal place was already loaded.
    pub duplicates: usize,
}

/// Build a database from the given sources, in order.
///
/// Duplicate records (equal in every field) keep their first position.
pub fn build<S: PostalSource>(sources: &[S]) -> PostalDb {
    build_with_report(sources).0
}

/// Like [`build`], also returning what happened along the way.
pub fn build_with_report<S: PostalSource>(sources: &[S]) -> (PostalDb, LoadReport) {
    let mut collector = Collector::default();

    for source in sources {
        match collector.load_source(source) {
            Ok(()) => collector.report.sources_loaded += 1,
            Err(e) => {
                collector.report.sources_failed += 1;
                warn!(error = %e, "Couldn't read source");
            }
        }
    }

    let Collector { places, report, .. } = collector;
    info!(
        sources = report.sources_loaded,
        failed = report.sources_failed,
        skipped_lines = report.lines_skipped,
        duplicates = report.duplicates,
        "Loaded postal data"
    );

    (PostalDb::new(places), report)
}

/// Insertion-ordered, duplicate-suppressing accumulator.
#[derive(Default)]
struct Collector {
    seen: HashSet<Place>,
    places: Vec<Place>,
    report: LoadReport,
}

impl Collector {
    /// Read every line of one source. The stream is dropped on return,
    /// whichever way that happens.
    fn load_source<S: PostalSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let name = source.name();
        let read_error = |e: std::io::Error| PostalError::SourceRead {
            source_name: name.clone(),
            source: e,
        };

        let mut reader = BufReader::new(source.open_stream().map_err(read_error)?);
        debug!(source = %name, "Reading postal source");

        let mut buf = Vec::new();
        let mut line_number = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(read_error)? == 0 {
                return Ok(());
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            match parser::parse_line(&line) {
                Ok(place) => self.insert(place),
                Err(e) => {
                    self.report.lines_skipped += 1;
                    debug!(source = %name, line = line_number, error = %e, "Couldn't read line");
                }
            }
        }
    }

    fn insert(&mut self, place: Place) {
        self.report.lines_parsed += 1;
        if self.seen.insert(place.clone()) {
            self.places.push(place);
        } else {
            self.report.duplicates += 1;
        }
    }
}

/// A database that is built from its sources on first access.
///
/// Holds the registered sources and builds exactly once, even when several
/// threads ask at the same time. Pass it (or an `Arc` of it) to whoever
/// needs the data instead of keeping a process-wide static.
///
/// ```no_run
/// use postaldb_core::prelude::*;
///
/// let lazy = LazyPostalDb::new()
///     .with_source(FileSource::new("data/US.txt"))
///     .with_source(FileSource::new("data/CA.txt.gz"));
///
/// let db = lazy.get();
/// println!("{} places", db.size());
/// ```
#[derive(Default)]
pub struct LazyPostalDb {
    sources: Vec<Box<dyn PostalSource + Send + Sync>>,
    db: OnceCell<PostalDb>,
}

impl LazyPostalDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register another source. Sources are read in registration order.
    pub fn with_source<S: PostalSource + Send + Sync + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// The database, building it first if nobody has yet.
    pub fn get(&self) -> &PostalDb {
        self.db.get_or_init(|| build(&self.sources))
    }

    pub fn is_initialized(&self) -> bool {
        self.db.get().is_some()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl std::fmt::Debug for LazyPostalDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("LazyPostalDb")
            .field("sources", &names)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
