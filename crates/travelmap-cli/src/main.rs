//! travelmap — Command-line interface for travelmap-core
//!
//! This binary provides a simple way to track visited countries from your
//! terminal. It loads a GeoJSON boundary dataset, persists per-country
//! visitation statuses in a JSON state file next to it, and prints overall
//! and per-continent statistics.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ travelmap --dataset countries.geojson stats
//!
//! - List all countries with statuses
//!   $ travelmap --dataset countries.geojson countries
//!
//! - Mark a country (by id or name, case-insensitive)
//!   $ travelmap --dataset countries.geojson set FRA visited
//!   $ travelmap --dataset countries.geojson set "japan" want-to-visit
//!
//! - Per-continent breakdown
//!   $ travelmap --dataset countries.geojson continents
//!
//! Data source
//! -----------
//!
//! Any admin-0 boundary FeatureCollection works; the Natural Earth 1:110m
//! countries dataset is the usual choice (build with `--features fetch` for
//! a `fetch` subcommand that downloads it). A binary sidecar cache is kept
//! next to the dataset for fast subsequent runs; disable with `--no-cache`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use travelmap_core::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    // Fetch needs no dataset or state
    #[cfg(feature = "fetch")]
    if let Commands::Fetch { dest } = &args.command {
        use travelmap_core::loader::{download_dataset, DATA_URL};
        download_dataset(DATA_URL, std::path::Path::new(dest))?;
        println!("Downloaded dataset to {dest}");
        return Ok(());
    }

    let dataset = args
        .dataset
        .as_deref()
        .context("--dataset <path> is required")?;
    let state_path = args
        .state
        .clone()
        .unwrap_or_else(|| format!("{dataset}.state.json"));

    let mut store = CountryStore::new(Box::new(FilePrefs::open(&state_path)));
    if args.no_cache {
        store.load_dataset(dataset);
    } else {
        store.load_dataset_cached(dataset);
    }

    match args.command {
        Commands::Stats => {
            let stats = store.stats();
            println!("Travel statistics:");
            println!("  Countries: {}", stats.total_countries);
            println!("  Visited: {}", stats.visited);
            println!("  Lived: {}", stats.lived);
            println!("  Want to visit: {}", stats.want_to_visit);
            println!(
                "  Visited or lived: {} ({:.1}%)",
                stats.visited_or_lived,
                stats.visited_percentage * 100.0
            );
        }

        Commands::Countries => {
            let mut ids: Vec<&str> = store.index().ids().collect();
            ids.sort_by_key(|id| fold_key(store.display_name(id).as_str()));
            for id in ids {
                let flag = store.flag_emoji(id);
                let status = store.status_for(id);
                println!(
                    "{}{} ({}) — {}",
                    if flag.is_empty() {
                        String::new()
                    } else {
                        format!("{flag} ")
                    },
                    store.display_name(id),
                    id,
                    status.label()
                );
            }
        }

        Commands::Country { query } => match resolve(&store, &query) {
            Some(id) => {
                println!("Country: {}", store.display_name(&id));
                println!("Id: {id}");
                println!("ISO2: {}", store.iso2_for(&id).unwrap_or("-"));
                println!(
                    "Continent: {}",
                    store.continent_for(&id).unwrap_or("Other")
                );
                println!("Status: {}", store.status_for(&id).label());
                let flag = store.flag_emoji(&id);
                if !flag.is_empty() {
                    println!("Flag: {flag}");
                }
                println!("Polygons: {}", store.shapes_for(&id).len());
            }
            None => {
                eprintln!("No country found for: {query}");
            }
        },

        Commands::Continents => {
            for stat in store.continent_stats() {
                println!(
                    "{}: {}/{} ({:.1}%)",
                    stat.continent,
                    stat.visited_or_lived,
                    stat.total,
                    stat.percentage * 100.0
                );
            }
        }

        Commands::Set { query, status } => {
            let status: VisitationStatus = status
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            match resolve(&store, &query) {
                Some(id) => {
                    store.update_status(&id, status);
                    println!("{} — {}", store.display_name(&id), status.label());
                }
                None => eprintln!("No country found for: {query}"),
            }
        }

        Commands::Clear { query } => match resolve(&store, &query) {
            Some(id) => {
                store.update_status(&id, VisitationStatus::None);
                println!("Cleared {}", store.display_name(&id));
            }
            None => eprintln!("No country found for: {query}"),
        },

        Commands::Flag { id } => {
            println!("{}", store.flag_emoji(&id));
        }

        #[cfg(feature = "fetch")]
        Commands::Fetch { .. } => unreachable!("handled before loading the dataset"),
    }

    Ok(())
}

/// Accepts either a country id or a display name (fold-insensitive).
fn resolve(store: &CountryStore, query: &str) -> Option<String> {
    if store.name_for(query).is_some() {
        return Some(query.to_string());
    }
    store.find_by_name(query).map(str::to_string)
}
