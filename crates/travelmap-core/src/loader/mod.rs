// crates/travelmap-core/src/loader/mod.rs

//! # Dataset Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates payload
//! parsing to the GeoJSON module. Parsed indexes can be mirrored into a
//! binary sidecar cache for fast subsequent loads.

use crate::error::{Result, TravelError};
use crate::model::CountryIndex;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

mod cache;
mod geojson;

#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "fetch")]
pub use fetch::{download_dataset, DATA_URL};

pub use geojson::load_from_reader;

/// Suffix appended to the dataset path for the binary sidecar cache.
pub const CACHE_SUFFIX: &str = "trv.bin";

/// Parses a GeoJSON FeatureCollection file into a country index.
///
/// With the `compact` feature, `.gz` sources are decompressed transparently.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CountryIndex> {
    let reader = open_stream(path.as_ref())?;
    load_from_reader(reader)
}

/// Like [`load_from_path`], but keeps a bincode sidecar next to the source.
///
/// A readable cache short-circuits the GeoJSON parse entirely; an unreadable
/// one falls back to a fresh parse, and cache writes are best-effort.
pub fn load_from_path_cached(path: impl AsRef<Path>) -> Result<CountryIndex> {
    let path = path.as_ref();
    let cache_path = cache_path(path);

    if let Some(index) = cache::read(&cache_path) {
        debug!(path = %cache_path.display(), "loaded index from sidecar cache");
        return Ok(index);
    }

    let index = load_from_path(path)?;
    cache::write(&cache_path, &index);
    Ok(index)
}

/// Sidecar cache path for a dataset source: `<file>.trv.bin` next to it.
pub fn cache_path(source: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => {
            source.with_file_name(format!("{}.{CACHE_SUFFIX}", name.to_string_lossy()))
        }
        None => source.with_extension(CACHE_SUFFIX),
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER (DRY)
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so. Returns a generic Reader so the caller doesn't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
