// crates/travelmap-core/src/store.rs

//! # Country Store
//!
//! The single owner of the boundary index and the status ledger. Consumers
//! receive it by reference/injection; there is no hidden global instance.
//!
//! Every mutation runs state-update → persist → notify, synchronously and
//! in that order, so observers reading after a revision bump always see a
//! consistent, already-persisted state.

use crate::error::Result;
use crate::loader;
use crate::model::{CountryIndex, CountryShape};
use crate::prefs::{PrefStore, KEY_CONTINENTS_EXPANDED, KEY_COUNTRY_STATUSES};
use crate::stats::{self, ContinentStat, TravelStats};
use crate::status::{StatusLedger, VisitationStatus};
use crate::style;
use crate::text::fold_key;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

type Observer = Box<dyn Fn(u64)>;

pub struct CountryStore {
    index: CountryIndex,
    ledger: StatusLedger,
    prefs: Box<dyn PrefStore>,
    revision: u64,
    observers: Vec<Observer>,
}

impl CountryStore {
    /// Builds a store over the given preference storage, restoring any
    /// previously persisted statuses. Corrupt or missing status bytes yield
    /// an empty ledger, never an error.
    pub fn new(prefs: Box<dyn PrefStore>) -> Self {
        let ledger = match prefs.get(KEY_COUNTRY_STATUSES) {
            Some(value) => {
                match serde_json::from_value::<HashMap<String, VisitationStatus>>(value) {
                    Ok(entries) => StatusLedger::from_entries(entries),
                    Err(err) => {
                        debug!(%err, "discarding unreadable status ledger");
                        StatusLedger::default()
                    }
                }
            }
            None => StatusLedger::default(),
        };

        Self {
            index: CountryIndex::default(),
            ledger,
            prefs,
            revision: 0,
            observers: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Dataset
    // -----------------------------------------------------------------------

    /// Replaces the index from a GeoJSON dataset file.
    ///
    /// A failed load leaves the store with zero countries and the caller
    /// keeps operating; only a successful load bumps the revision.
    pub fn load_dataset(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.install(loader::load_from_path(path), path);
    }

    /// Like [`CountryStore::load_dataset`], via the binary sidecar cache.
    pub fn load_dataset_cached(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.install(loader::load_from_path_cached(path), path);
    }

    /// Installs an already-built index (fixtures, embedded datasets).
    pub fn replace_index(&mut self, index: CountryIndex) {
        self.index = index;
        self.bump();
    }

    fn install(&mut self, loaded: Result<CountryIndex>, path: &Path) {
        match loaded {
            Ok(index) => {
                self.index = index;
                self.bump();
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "dataset load failed, continuing with empty index");
                self.index = CountryIndex::default();
            }
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn index(&self) -> &CountryIndex {
        &self.index
    }

    pub fn total_countries(&self) -> usize {
        self.index.total_countries()
    }

    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.index.name_for(id)
    }

    pub fn iso2_for(&self, id: &str) -> Option<&str> {
        self.index.iso2_for(id)
    }

    pub fn continent_for(&self, id: &str) -> Option<&str> {
        self.index.continent_for(id)
    }

    /// The stored status, or `None` when absent. Never fails.
    pub fn status_for(&self, id: &str) -> VisitationStatus {
        self.ledger.status_for(id)
    }

    /// All shapes in dataset order, for the rendering layer.
    pub fn shapes(&self) -> &[CountryShape] {
        self.index.shapes()
    }

    /// Every shape belonging to one country, for highlight/zoom interactions.
    pub fn shapes_for(&self, id: &str) -> Vec<&CountryShape> {
        self.index
            .shapes()
            .iter()
            .filter(|s| s.country_id == id)
            .collect()
    }

    pub fn stats(&self) -> TravelStats {
        stats::travel_stats(&self.index, &self.ledger)
    }

    pub fn continent_stats(&self) -> Vec<ContinentStat> {
        stats::continent_stats(&self.index, &self.ledger)
    }

    /// Display name for an id, echoing the id back when unknown.
    pub fn display_name(&self, id: &str) -> String {
        match self.index.name_for(id) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        }
    }

    /// Flag emoji for an id's ISO alpha-2 code, looked up by the raw id and
    /// then its uppercased form. Empty when no valid 2-letter code exists.
    pub fn flag_emoji(&self, id: &str) -> String {
        let code = self
            .index
            .iso2_for(id)
            .or_else(|| self.index.iso2_for(&id.to_uppercase()));
        code.map(style::flag_emoji).unwrap_or_default()
    }

    /// Fill color for a country's current status.
    pub fn fill_color_for(&self, id: &str) -> style::Rgba {
        style::fill_color(self.status_for(id))
    }

    /// Stroke color for a country's current status.
    pub fn stroke_color_for(&self, id: &str) -> style::Rgba {
        style::stroke_color(self.status_for(id))
    }

    /// Accent- and case-insensitive lookup of a country id by display name.
    pub fn find_by_name(&self, query: &str) -> Option<&str> {
        let folded = fold_key(query);
        self.index.ids().find(|id| {
            self.index
                .name_for(id)
                .is_some_and(|name| fold_key(name) == folded)
        })
    }

    /// The continent list expand/collapse preference (defaults to expanded).
    pub fn continents_expanded(&self) -> bool {
        self.prefs.get_bool(KEY_CONTINENTS_EXPANDED).unwrap_or(true)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Sets the status for a country id.
    ///
    /// `None` removes the entry; anything else inserts or overwrites. The
    /// full ledger is re-persisted unconditionally (even when the new status
    /// equals the old one), then the revision is bumped.
    pub fn update_status(&mut self, id: &str, status: VisitationStatus) {
        self.ledger.set(id, status);
        self.persist_ledger();
        self.bump();
    }

    pub fn set_continents_expanded(&mut self, expanded: bool) {
        self.prefs.set_bool(KEY_CONTINENTS_EXPANDED, expanded);
    }

    fn persist_ledger(&mut self) {
        match serde_json::to_value(self.ledger.entries()) {
            Ok(value) => self.prefs.set(KEY_COUNTRY_STATUSES, value),
            Err(err) => {
                // in-memory ledger stays authoritative for the session
                warn!(%err, "failed to encode status ledger");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Monotonic change counter; observers re-read derived state when it
    /// moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback invoked synchronously after every revision bump.
    pub fn subscribe(&mut self, observer: impl Fn(u64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn bump(&mut self) {
        self.revision += 1;
        for observer in &self.observers {
            observer(self.revision);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store_with_fixture() -> CountryStore {
        let mut index = CountryIndex::new();
        index.insert_feature(
            "FRA",
            "France",
            Some("FR".into()),
            Some("Europe".into()),
            Vec::new(),
        );
        index.insert_feature("JPN", "Japan", Some("JP".into()), Some("Asia".into()), Vec::new());

        let mut store = CountryStore::new(Box::new(MemoryPrefs::new()));
        store.replace_index(index);
        store
    }

    #[test]
    fn update_and_clear_status() {
        let mut store = store_with_fixture();
        store.update_status("FRA", VisitationStatus::Visited);
        assert_eq!(store.status_for("FRA"), VisitationStatus::Visited);

        store.update_status("FRA", VisitationStatus::None);
        assert_eq!(store.status_for("FRA"), VisitationStatus::None);
        assert_eq!(store.stats().visited, 0);
    }

    #[test]
    fn every_mutation_bumps_and_notifies() {
        let mut store = store_with_fixture();
        let seen = Rc::new(Cell::new(0u64));
        let sink = Rc::clone(&seen);
        store.subscribe(move |rev| sink.set(rev));

        let before = store.revision();
        store.update_status("JPN", VisitationStatus::WantToVisit);
        assert_eq!(store.revision(), before + 1);
        assert_eq!(seen.get(), store.revision());

        // same status again still persists and bumps (no dirty check)
        store.update_status("JPN", VisitationStatus::WantToVisit);
        assert_eq!(store.revision(), before + 2);
    }

    #[test]
    fn display_name_echoes_unknown_ids() {
        let store = store_with_fixture();
        assert_eq!(store.display_name("FRA"), "France");
        assert_eq!(store.display_name("ZZZ"), "ZZZ");
    }

    #[test]
    fn flag_emoji_falls_back_to_uppercased_id() {
        let store = store_with_fixture();
        assert!(!store.flag_emoji("FRA").is_empty());
        assert_eq!(store.flag_emoji("fra"), store.flag_emoji("FRA"));
        assert_eq!(store.flag_emoji("ZZZ"), "");
    }

    #[test]
    fn find_by_name_is_fold_insensitive() {
        let store = store_with_fixture();
        assert_eq!(store.find_by_name("france"), Some("FRA"));
        assert_eq!(store.find_by_name("JAPAN"), Some("JPN"));
        assert_eq!(store.find_by_name("Atlantis"), None);
    }

    #[test]
    fn expanded_preference_defaults_to_true() {
        let mut store = store_with_fixture();
        assert!(store.continents_expanded());
        store.set_continents_expanded(false);
        assert!(!store.continents_expanded());
    }

    #[test]
    fn failed_dataset_load_degrades_to_empty() {
        let mut store = store_with_fixture();
        let before = store.revision();
        store.load_dataset("/no/such/file.geojson");

        assert_eq!(store.total_countries(), 0);
        assert_eq!(store.stats().visited_percentage, 0.0);
        // degraded loads do not bump the revision
        assert_eq!(store.revision(), before);
    }
}
