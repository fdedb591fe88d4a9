// crates/postaldb-core/src/loader/source.rs
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::common_io;
use crate::traits::PostalSource;

/// A GeoNames export on disk, e.g. `US.txt` or `allCountries.txt.gz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostalSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn open_stream(&self) -> io::Result<Box<dyn Read + Send>> {
        common_io::open_stream(&self.path)
    }
}

/// Dataset bytes already in memory: an `include_str!` payload, test data.
#[derive(Debug, Clone)]
pub struct ReaderSource {
    name: String,
    data: Arc<[u8]>,
}

impl ReaderSource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: Arc::from(data.into()),
        }
    }

    /// Convenience for `&'static str` datasets compiled into the binary.
    pub fn from_static(name: impl Into<String>, data: &'static str) -> Self {
        Self::new(name, data.as_bytes())
    }
}

impl PostalSource for ReaderSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open_stream(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }
}
