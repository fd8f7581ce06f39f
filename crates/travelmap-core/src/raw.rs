// crates/travelmap-core/src/raw.rs

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw GeoJSON feature collection as it comes from the dataset file.
///
/// Only the subset of the schema the loader consumes is modeled; unknown
/// members are ignored by serde.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(default)]
    pub features: Vec<FeatureRaw>,
}

/// A single raw feature: arbitrary properties plus an optional geometry.
#[derive(Debug, Deserialize)]
pub struct FeatureRaw {
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
}

/// Raw geometry, discriminated by the GeoJSON `type` member.
///
/// Positions are kept as `Vec<f64>` here; upstream files may carry a third
/// altitude component, which the loader drops during conversion.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryRaw {
    Polygon { coordinates: RawPolygon },
    MultiPolygon { coordinates: Vec<RawPolygon> },
    #[serde(other)]
    Unsupported,
}

pub type RawPosition = Vec<f64>;
pub type RawRing = Vec<RawPosition>;
pub type RawPolygon = Vec<RawRing>;
