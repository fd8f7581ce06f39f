//! travelmap-cli
//! =============
//!
//! Command-line interface for the `travelmap-core` travel-tracking store.
//!
//! This crate primarily provides a binary (`travelmap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install travelmap-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! travelmap --help
//! travelmap --dataset countries.geojson stats
//! travelmap --dataset countries.geojson set FRA visited
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`travelmap-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/travelmap-rs/travelmap-rs>
//! - Core crate: <https://docs.rs/travelmap-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
