//! Status persistence example for travelmap-rs
//!
//! Demonstrates the durable state file: statuses written through one store
//! are restored by the next, and map colors follow the current status.

use travelmap_core::prelude::*;
use travelmap_core::style;

fn main() -> Result<()> {
    println!("=== travelmap-rs Status Tracking Example ===\n");

    let state_path = std::env::temp_dir().join("travelmap-demo-state.json");

    // Session 1: mark a few countries
    {
        let mut store = CountryStore::new(Box::new(FilePrefs::open(&state_path)));
        store.subscribe(|rev| println!("  (revision {rev})"));

        store.update_status("ITA", VisitationStatus::Visited);
        store.update_status("DEU", VisitationStatus::Lived);
        store.update_status("NZL", VisitationStatus::WantToVisit);
        println!("Session 1 wrote 3 statuses\n");
    }

    // Session 2: a fresh store restores them from disk
    let store = CountryStore::new(Box::new(FilePrefs::open(&state_path)));
    println!("Session 2 restored:");
    for id in ["ITA", "DEU", "NZL", "FRA"] {
        let status = store.status_for(id);
        let fill = style::fill_color(status);
        println!(
            "- {id}: {} (fill #{:02X}{:02X}{:02X}{:02X})",
            status.label(),
            fill.r, fill.g, fill.b, fill.a
        );
    }

    std::fs::remove_file(&state_path).ok();
    println!("\n=== Example completed successfully ===");
    Ok(())
}
