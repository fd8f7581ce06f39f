// crates/travelmap-core/src/error.rs

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TravelError>;

/// Errors produced by the fallible loader entry points and tooling.
///
/// The store-facing wrappers never surface these: a failed dataset load
/// degrades to an empty index and a failed persist leaves the in-memory
/// state authoritative.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("index cache error: {0}")]
    Cache(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("download failed: {0}")]
    Fetch(String),
}
