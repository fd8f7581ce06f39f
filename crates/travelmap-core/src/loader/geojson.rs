// crates/travelmap-core/src/loader/geojson.rs

//! GeoJSON payload parsing: raw feature collection → [`CountryIndex`].

use crate::error::Result;
use crate::identity;
use crate::model::{CountryIndex, Polygon};
use crate::raw::{FeatureCollectionRaw, GeometryRaw, RawPolygon};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;

/// Parses a GeoJSON FeatureCollection into a country index.
///
/// Every feature is registered in the metadata maps; `Polygon` geometry
/// appends one tagged shape, `MultiPolygon` one per constituent ring-set,
/// and anything else contributes no geometry.
pub fn load_from_reader(reader: impl Read) -> Result<CountryIndex> {
    let collection: FeatureCollectionRaw = serde_json::from_reader(reader)?;

    let mut index = CountryIndex::new();
    for feature in collection.features {
        let props = normalize_properties(&feature.properties);
        let name = identity::resolve_name(&props);
        let id = identity::resolve_id(&props);

        let polygons: Vec<Polygon> = match feature.geometry {
            Some(GeometryRaw::Polygon { coordinates }) => vec![convert_polygon(coordinates)],
            Some(GeometryRaw::MultiPolygon { coordinates }) => {
                coordinates.into_iter().map(convert_polygon).collect()
            }
            _ => Vec::new(),
        };

        index.insert_feature(
            &id,
            &name,
            identity::resolve_iso2(&props),
            identity::resolve_continent(&props),
            polygons,
        );
    }
    Ok(index)
}

/// Flattens feature properties to string values: strings pass through,
/// numbers render in their decimal form, everything else is dropped.
fn normalize_properties(props: &BTreeMap<String, Value>) -> identity::Properties {
    props
        .iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key.clone(), s.clone())),
            Value::Number(n) => Some((key.clone(), n.to_string())),
            _ => None,
        })
        .collect()
}

/// Drops any altitude component and skips degenerate positions.
fn convert_polygon(raw: RawPolygon) -> Polygon {
    raw.into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter_map(|pos| match pos.as_slice() {
                    [lon, lat, ..] => Some([*lon, *lat]),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_properties_normalize_to_decimal_strings() {
        // "id" carries a number; normalization must turn it into "250"
        let json = r#"{
            "features": [{
                "properties": {"NAME": "Testland", "id": 250, "FLAG": true},
                "geometry": null
            }]
        }"#;
        let index = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(index.total_countries(), 1);
        assert_eq!(index.name_for("250"), Some("Testland"));
    }

    #[test]
    fn boolean_and_object_properties_are_dropped() {
        // with NAME dropped, resolution degrades to "Unknown"
        let json = r#"{
            "features": [{
                "properties": {"NAME": true, "meta": {"NAME": "nested"}},
                "geometry": null
            }]
        }"#;
        let index = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(index.name_for("Unknown"), Some("Unknown"));
    }

    #[test]
    fn multipolygon_parts_share_one_country() {
        let json = r#"{
            "features": [{
                "properties": {"NAME": "Islandia", "ISO_A3": "ISL"},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]]
                ]}
            }]
        }"#;
        let index = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(index.total_countries(), 1);
        assert_eq!(index.shapes_for("ISL").count(), 2);
    }

    #[test]
    fn unsupported_geometry_registers_without_shapes() {
        let json = r#"{
            "features": [{
                "properties": {"NAME": "Pointland", "ISO_A3": "PTL"},
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
            }]
        }"#;
        let index = load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(index.total_countries(), 1);
        assert_eq!(index.shapes().len(), 0);
    }

    #[test]
    fn altitude_components_are_dropped() {
        let json = r#"{
            "features": [{
                "properties": {"NAME": "Peakland", "ISO_A3": "PKL"},
                "geometry": {"type": "Polygon", "coordinates": [[[1.0, 2.0, 99.0], [3.0, 4.0, 99.0], [1.0, 2.0, 99.0]]]}
            }]
        }"#;
        let index = load_from_reader(json.as_bytes()).unwrap();
        let shape = &index.shapes()[0];
        assert_eq!(shape.rings[0][0], [1.0, 2.0]);
    }
}
