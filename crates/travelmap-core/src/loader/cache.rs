// crates/travelmap-core/src/loader/cache.rs

//! Binary sidecar cache for parsed indexes.
//!
//! Strictly best-effort in both directions: unreadable caches fall back to
//! a fresh parse, failed writes are logged and swallowed.

use crate::model::CountryIndex;
use bincode::Options;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Decode limit guarding against corrupt length prefixes and data bombs.
const DECODE_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
        .with_limit(DECODE_LIMIT)
        .allow_trailing_bytes()
}

pub fn read(path: &Path) -> Option<CountryIndex> {
    let data = fs::read(path).ok()?;
    match options().deserialize(&data) {
        Ok(index) => Some(index),
        Err(err) => {
            debug!(path = %path.display(), %err, "ignoring unreadable index cache");
            None
        }
    }
}

pub fn write(path: &Path, index: &CountryIndex) {
    let encoded = match options().serialize(index) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%err, "failed to encode index cache");
            return;
        }
    };
    if let Err(err) = fs::write(path, encoded) {
        warn!(path = %path.display(), %err, "failed to write index cache");
    }
}
