// crates/travelmap-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

//! Dataset download tooling (blocking HTTP client).

use crate::error::{Result, TravelError};
use std::fs;
use std::path::Path;

/// Public Natural Earth 1:110m admin-0 countries dataset.
pub const DATA_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// Downloads a boundary dataset to `dest`.
pub fn download_dataset(url: &str, dest: &Path) -> Result<()> {
    let response =
        reqwest::blocking::get(url).map_err(|e| TravelError::Fetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(TravelError::Fetch(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }
    let body = response
        .bytes()
        .map_err(|e| TravelError::Fetch(e.to_string()))?;
    fs::write(dest, &body)?;
    Ok(())
}
