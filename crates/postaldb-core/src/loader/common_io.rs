// crates/postaldb-core/src/loader/common_io.rs
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it and, for `.gz` files, wraps it in a Gzip
/// decoder. Callers get a plain reader regardless of compression.
pub fn open_stream(path: &Path) -> io::Result<Box<dyn Read + Send>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Dataset not found at {}: {}", path.display(), e),
        )
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            tracing::debug!(path = %path.display(), "Opening gzip compressed dataset");
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!(
                    "{} is gzip compressed but the 'compact' feature is disabled",
                    path.display()
                ),
            ));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
