use clap::{Parser, Subcommand};

/// CLI arguments for travelmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "travelmap",
    version,
    about = "CLI for tracking visited countries over a GeoJSON boundary dataset"
)]
pub struct CliArgs {
    /// Path to the boundary dataset (.geojson, or .geojson.gz with the compact feature)
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<String>,

    /// Path to the state file holding statuses and preferences
    /// (default: <dataset>.state.json)
    #[arg(short = 's', long = "state", global = true)]
    pub state: Option<String>,

    /// Skip the binary sidecar cache and always parse the dataset
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show overall travel statistics
    Stats,

    /// List all countries with their statuses
    Countries,

    /// Show details for one country (by id or name)
    Country {
        /// Country id (e.g. FRA) or display name (e.g. France)
        query: String,
    },

    /// Show per-continent statistics
    Continents,

    /// Set the visitation status for a country
    Set {
        /// Country id or display name
        query: String,
        /// One of: none, visited, lived, want-to-visit
        status: String,
    },

    /// Clear the visitation status for a country
    Clear {
        /// Country id or display name
        query: String,
    },

    /// Print the flag emoji for a country
    Flag {
        /// Country id (e.g. FRA)
        id: String,
    },

    /// Download the public boundary dataset
    #[cfg(feature = "fetch")]
    Fetch {
        /// Destination path for the downloaded GeoJSON
        dest: String,
    },
}
