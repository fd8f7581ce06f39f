// crates/travelmap-core/src/status.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Visitation status of a single country.
///
/// `None` is the implicit default and is never persisted: writing it for a
/// country removes the ledger entry instead of recording it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitationStatus {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "visited")]
    Visited,
    #[serde(rename = "lived")]
    Lived,
    #[serde(rename = "wantToVisit")]
    WantToVisit,
}

impl VisitationStatus {
    pub const ALL: [VisitationStatus; 4] = [
        VisitationStatus::None,
        VisitationStatus::Visited,
        VisitationStatus::Lived,
        VisitationStatus::WantToVisit,
    ];

    /// Whether this status counts toward the visited percentage.
    pub fn is_visited_or_lived(self) -> bool {
        matches!(self, VisitationStatus::Visited | VisitationStatus::Lived)
    }

    /// Human label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            VisitationStatus::None => "Not set",
            VisitationStatus::Visited => "Visited",
            VisitationStatus::Lived => "Lived",
            VisitationStatus::WantToVisit => "Want to visit",
        }
    }
}

impl FromStr for VisitationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(VisitationStatus::None),
            "visited" => Ok(VisitationStatus::Visited),
            "lived" => Ok(VisitationStatus::Lived),
            "want-to-visit" | "wantToVisit" => Ok(VisitationStatus::WantToVisit),
            other => Err(format!(
                "unknown status '{other}' (expected none, visited, lived or want-to-visit)"
            )),
        }
    }
}

/// Mapping from country id to non-default [`VisitationStatus`].
///
/// Holds entries only for countries the user has actually marked; an absent
/// id means `None`. Persistence is owned by the store; the ledger itself is
/// a plain in-memory map.
#[derive(Clone, Debug, Default)]
pub struct StatusLedger {
    entries: HashMap<String, VisitationStatus>,
}

impl StatusLedger {
    /// Builds a ledger from decoded storage entries, discarding any explicit
    /// `None` values a hand-edited file might carry.
    pub fn from_entries(entries: HashMap<String, VisitationStatus>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(_, status)| *status != VisitationStatus::None)
            .collect();
        Self { entries }
    }

    /// The stored status, or `None` when absent. Never fails.
    pub fn status_for(&self, id: &str) -> VisitationStatus {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Inserts or overwrites an entry; `None` removes it.
    pub fn set(&mut self, id: &str, status: VisitationStatus) {
        if status == VisitationStatus::None {
            self.entries.remove(id);
        } else {
            self.entries.insert(id.to_string(), status);
        }
    }

    /// The raw entry map, as persisted.
    pub fn entries(&self) -> &HashMap<String, VisitationStatus> {
        &self.entries
    }

    pub fn count_of(&self, status: VisitationStatus) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }

    pub fn visited_or_lived(&self) -> usize {
        self.entries
            .values()
            .filter(|s| s.is_visited_or_lived())
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_none_removes_the_entry() {
        let mut ledger = StatusLedger::default();
        ledger.set("FRA", VisitationStatus::Visited);
        assert_eq!(ledger.status_for("FRA"), VisitationStatus::Visited);

        ledger.set("FRA", VisitationStatus::None);
        assert_eq!(ledger.status_for("FRA"), VisitationStatus::None);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn absent_id_reads_as_none() {
        let ledger = StatusLedger::default();
        assert_eq!(ledger.status_for("XYZ"), VisitationStatus::None);
    }

    #[test]
    fn from_entries_drops_explicit_none() {
        let mut raw = HashMap::new();
        raw.insert("DEU".to_string(), VisitationStatus::Lived);
        raw.insert("FRA".to_string(), VisitationStatus::None);
        let ledger = StatusLedger::from_entries(raw);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.status_for("DEU"), VisitationStatus::Lived);
    }

    #[test]
    fn counts_by_status() {
        let mut ledger = StatusLedger::default();
        ledger.set("FRA", VisitationStatus::Visited);
        ledger.set("DEU", VisitationStatus::Lived);
        ledger.set("JPN", VisitationStatus::WantToVisit);

        assert_eq!(ledger.count_of(VisitationStatus::Visited), 1);
        assert_eq!(ledger.count_of(VisitationStatus::Lived), 1);
        assert_eq!(ledger.count_of(VisitationStatus::WantToVisit), 1);
        assert_eq!(ledger.visited_or_lived(), 2);
    }

    #[test]
    fn status_serializes_to_wire_names() {
        let json = serde_json::to_string(&VisitationStatus::WantToVisit).unwrap();
        assert_eq!(json, "\"wantToVisit\"");
        let back: VisitationStatus = serde_json::from_str("\"lived\"").unwrap();
        assert_eq!(back, VisitationStatus::Lived);
    }
}
