// crates/travelmap-core/src/stats.rs

//! Aggregate travel statistics.
//!
//! Every aggregate is recomputed from the current index and ledger on each
//! read. Country counts are bounded by the real world (~200), so there is no
//! caching or invalidation logic to get wrong.

use crate::model::CountryIndex;
use crate::status::{StatusLedger, VisitationStatus};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Continent bucket for countries with absent or empty continent data.
pub const OTHER_CONTINENT: &str = "Other";

/// Global counts derived from the index and the ledger.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TravelStats {
    pub total_countries: usize,
    pub visited: usize,
    pub lived: usize,
    pub want_to_visit: usize,
    pub visited_or_lived: usize,
    /// visited-or-lived over total, in [0, 1]; 0 when the index is empty.
    pub visited_percentage: f64,
}

/// Per-continent counts. A continent appears only if it has at least one
/// country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContinentStat {
    pub continent: String,
    pub total: usize,
    pub visited_or_lived: usize,
    /// visited-or-lived over total, in [0, 1].
    pub percentage: f64,
}

/// Computes the global counts.
pub fn travel_stats(index: &CountryIndex, ledger: &StatusLedger) -> TravelStats {
    let total_countries = index.total_countries();
    let visited_or_lived = ledger.visited_or_lived();
    let visited_percentage = if total_countries == 0 {
        0.0
    } else {
        visited_or_lived as f64 / total_countries as f64
    };

    TravelStats {
        total_countries,
        visited: ledger.count_of(VisitationStatus::Visited),
        lived: ledger.count_of(VisitationStatus::Lived),
        want_to_visit: ledger.count_of(VisitationStatus::WantToVisit),
        visited_or_lived,
        visited_percentage,
    }
}

/// Groups every country by continent and computes per-group counts, sorted
/// by continent name (case-insensitive).
pub fn continent_stats(index: &CountryIndex, ledger: &StatusLedger) -> Vec<ContinentStat> {
    let mut groups: HashMap<&str, (usize, usize)> = HashMap::new();

    for id in index.ids() {
        let continent = index.continent_for(id).unwrap_or(OTHER_CONTINENT);
        let entry = groups.entry(continent).or_default();
        entry.0 += 1;
        if ledger.status_for(id).is_visited_or_lived() {
            entry.1 += 1;
        }
    }

    let mut stats: Vec<ContinentStat> = groups
        .into_iter()
        .map(|(continent, (total, visited_or_lived))| ContinentStat {
            continent: continent.to_string(),
            total,
            visited_or_lived,
            percentage: visited_or_lived as f64 / total as f64,
        })
        .collect();
    stats.sort_by(|a, b| fold_key(&a.continent).cmp(&fold_key(&b.continent)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (CountryIndex, StatusLedger) {
        let mut index = CountryIndex::new();
        index.insert_feature("FRA", "France", None, Some("Europe".into()), Vec::new());
        index.insert_feature("DEU", "Germany", None, Some("Europe".into()), Vec::new());
        index.insert_feature("JPN", "Japan", None, Some("asia".into()), Vec::new());
        index.insert_feature("UNK", "Atlantis", None, None, Vec::new());

        let mut ledger = StatusLedger::default();
        ledger.set("FRA", VisitationStatus::Visited);
        ledger.set("DEU", VisitationStatus::Lived);
        ledger.set("JPN", VisitationStatus::WantToVisit);
        (index, ledger)
    }

    #[test]
    fn global_counts() {
        let (index, ledger) = fixture();
        let stats = travel_stats(&index, &ledger);

        assert_eq!(stats.total_countries, 4);
        assert_eq!(stats.visited, 1);
        assert_eq!(stats.lived, 1);
        assert_eq!(stats.want_to_visit, 1);
        assert_eq!(stats.visited_or_lived, 2);
        assert!((stats.visited_percentage - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_index_has_zero_percentage() {
        let stats = travel_stats(&CountryIndex::new(), &StatusLedger::default());
        assert_eq!(stats.total_countries, 0);
        assert_eq!(stats.visited_percentage, 0.0);
    }

    #[test]
    fn continents_sorted_case_insensitively_with_other_bucket() {
        let (index, ledger) = fixture();
        let stats = continent_stats(&index, &ledger);

        let names: Vec<&str> = stats.iter().map(|s| s.continent.as_str()).collect();
        // "asia" sorts before "Europe" sorts before "Other" once folded
        assert_eq!(names, vec!["asia", "Europe", "Other"]);

        let europe = &stats[1];
        assert_eq!(europe.total, 2);
        assert_eq!(europe.visited_or_lived, 2);
        assert!((europe.percentage - 1.0).abs() < f64::EPSILON);

        let other = &stats[2];
        assert_eq!(other.total, 1);
        assert_eq!(other.visited_or_lived, 0);
        assert_eq!(other.percentage, 0.0);
    }

    #[test]
    fn every_listed_continent_has_countries() {
        let (index, ledger) = fixture();
        for stat in continent_stats(&index, &ledger) {
            assert!(stat.total > 0);
            assert!((0.0..=1.0).contains(&stat.percentage));
        }
    }
}
