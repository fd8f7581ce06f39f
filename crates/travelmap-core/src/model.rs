// crates/travelmap-core/src/model.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A closed ring of `[lon, lat]` positions.
pub type Ring = Vec<[f64; 2]>;

/// One polygon: the first ring is the exterior boundary, any further rings
/// are holes.
pub type Polygon = Vec<Ring>;

/// A single polygon tagged with the country it belongs to.
///
/// A country may contribute several shapes (archipelagos, territories split
/// across the map edge). The rendering layer draws shapes in index order and
/// maps interactions back through `country_id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryShape {
    pub country_id: String,
    pub name: String,
    pub rings: Polygon,
}

/// The in-memory country index built by the loader.
///
/// Holds the ordered shape list plus the id-keyed metadata maps. Ids are
/// unique; duplicate features sharing an id keep the first-seen metadata
/// while their geometries are appended, never deduplicated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryIndex {
    names: HashMap<String, String>,
    iso2: HashMap<String, String>,
    continents: HashMap<String, String>,
    shapes: Vec<CountryShape>,
}

impl CountryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one resolved feature.
    ///
    /// First-seen name/iso2/continent win for the country entry; every
    /// polygon is appended as its own tagged shape.
    pub fn insert_feature(
        &mut self,
        id: &str,
        name: &str,
        iso2: Option<String>,
        continent: Option<String>,
        polygons: Vec<Polygon>,
    ) {
        self.names
            .entry(id.to_string())
            .or_insert_with(|| name.to_string());
        if let Some(code) = iso2 {
            self.iso2.entry(id.to_string()).or_insert(code);
        }
        if let Some(continent) = continent {
            self.continents.entry(id.to_string()).or_insert(continent);
        }
        for rings in polygons {
            self.shapes.push(CountryShape {
                country_id: id.to_string(),
                name: name.to_string(),
                rings,
            });
        }
    }

    /// Number of distinct countries in the index.
    pub fn total_countries(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn iso2_for(&self, id: &str) -> Option<&str> {
        self.iso2.get(id).map(String::as_str)
    }

    pub fn continent_for(&self, id: &str) -> Option<&str> {
        self.continents.get(id).map(String::as_str)
    }

    /// All shapes in dataset order, for the rendering layer.
    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    /// Every shape belonging to one country.
    pub fn shapes_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a CountryShape> {
        self.shapes.iter().filter(move |s| s.country_id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }
}
