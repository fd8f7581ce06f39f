//! Basic usage example for travelmap-rs
//!
//! This example demonstrates how to:
//! - Build a country store over in-memory preferences
//! - Load a boundary dataset from an embedded GeoJSON snippet
//! - Look up names, flags and geometry by country id
//! - Read overall travel statistics

use travelmap_core::loader;
use travelmap_core::prelude::*;

const DATASET: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"NAME": "France", "ISO_A3": "FRA", "ISO_A2": "FR", "CONTINENT": "Europe"},
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 42.0], [8.0, 42.0], [8.0, 51.0], [0.0, 42.0]]]}
        },
        {
            "type": "Feature",
            "properties": {"NAME": "Brazil", "ISO_A3": "BRA", "ISO_A2": "BR", "CONTINENT": "South America"},
            "geometry": {"type": "Polygon", "coordinates": [[[-74.0, -34.0], [-34.0, -34.0], [-34.0, 5.0], [-74.0, -34.0]]]}
        },
        {
            "type": "Feature",
            "properties": {"NAME": "Japan", "ISO_A3": "JPN", "ISO_A2": "JP", "CONTINENT": "Asia"},
            "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[130.0, 30.0], [132.0, 30.0], [132.0, 32.0], [130.0, 30.0]]],
                [[[139.0, 35.0], [141.0, 35.0], [141.0, 37.0], [139.0, 35.0]]]
            ]}
        }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== travelmap-rs Basic Usage Example ===\n");

    // Build the store and load the dataset
    let mut store = CountryStore::new(Box::new(MemoryPrefs::new()));
    store.replace_index(loader::load_from_reader(DATASET.as_bytes())?);
    println!("✓ Loaded {} countries\n", store.total_countries());

    // Example 1: Look up a country
    println!("--- Example 1: Country lookups ---");
    println!("Name: {}", store.display_name("JPN"));
    println!("Flag: {}", store.flag_emoji("JPN"));
    println!("Continent: {}", store.continent_for("JPN").unwrap_or("Other"));
    println!("Polygons: {}\n", store.shapes_for("JPN").len());

    // Example 2: Mark some countries
    println!("--- Example 2: Update statuses ---");
    store.update_status("FRA", VisitationStatus::Visited);
    store.update_status("JPN", VisitationStatus::WantToVisit);
    println!("France: {}", store.status_for("FRA").label());
    println!("Japan: {}\n", store.status_for("JPN").label());

    // Example 3: Statistics
    println!("--- Example 3: Statistics ---");
    let stats = store.stats();
    println!(
        "Visited or lived: {}/{} ({:.0}%)",
        stats.visited_or_lived,
        stats.total_countries,
        stats.visited_percentage * 100.0
    );
    for stat in store.continent_stats() {
        println!("- {}: {}/{}", stat.continent, stat.visited_or_lived, stat.total);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
