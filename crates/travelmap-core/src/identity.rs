// crates/travelmap-core/src/identity.rs

//! # Country Identity Resolution
//!
//! Open boundary datasets are inconsistent about property naming across
//! vendors and versions. Resolution walks a fixed, data-driven priority
//! list of candidate keys and takes the first present value, so a future
//! schema variant is a one-line change. Resolution never fails; it only
//! degrades to best-effort identity.

use std::collections::BTreeMap;

/// Normalized feature properties: every value flattened to a string.
pub type Properties = BTreeMap<String, String>;

/// Candidate keys for the display name, highest priority first.
pub const NAME_KEYS: &[&str] = &["name", "NAME", "ADMIN", "NAME_LONG"];

/// Candidate keys for the stable country id, highest priority first.
pub const ID_KEYS: &[&str] = &[
    "ISO_A3", "iso_a3", "ADM0_A3", "SOV_A3", "GU_A3", "SU_A3", "BRK_A3", "id",
];

/// Candidate keys for the ISO 3166-1 alpha-2 code.
pub const ISO2_KEYS: &[&str] = &["ISO_A2", "iso_a2"];

/// Candidate keys for the continent name.
pub const CONTINENT_KEYS: &[&str] = &["CONTINENT", "REGION_UN"];

/// Display name used when no name key is present at all.
pub const UNKNOWN_NAME: &str = "Unknown";

fn first_present<'a>(props: &'a Properties, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| props.get(*k).map(String::as_str))
}

/// Resolves the human display name, falling back to [`UNKNOWN_NAME`].
pub fn resolve_name(props: &Properties) -> String {
    first_present(props, NAME_KEYS)
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Resolves the stable country id.
///
/// Falls back to the resolved display name when no id key is present, so
/// two features carrying only the same name still collapse into one entry.
pub fn resolve_id(props: &Properties) -> String {
    match first_present(props, ID_KEYS) {
        Some(id) => id.to_string(),
        None => resolve_name(props),
    }
}

/// Resolves the ISO alpha-2 code; accepted only when exactly 2 characters.
pub fn resolve_iso2(props: &Properties) -> Option<String> {
    first_present(props, ISO2_KEYS)
        .filter(|code| code.chars().count() == 2)
        .map(str::to_string)
}

/// Resolves the continent name; accepted only when non-empty.
pub fn resolve_continent(props: &Properties) -> Option<String> {
    first_present(props, CONTINENT_KEYS)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn higher_priority_id_key_wins() {
        let p = props(&[("ISO_A3", "FRX"), ("id", "FR999")]);
        assert_eq!(resolve_id(&p), "FRX");
    }

    #[test]
    fn id_falls_back_to_display_name() {
        let p = props(&[("NAME", "France")]);
        assert_eq!(resolve_id(&p), "France");
    }

    #[test]
    fn name_priority_order() {
        let p = props(&[("NAME_LONG", "French Republic"), ("ADMIN", "France")]);
        assert_eq!(resolve_name(&p), "France");
    }

    #[test]
    fn missing_name_is_unknown() {
        assert_eq!(resolve_name(&props(&[])), UNKNOWN_NAME);
        assert_eq!(resolve_id(&props(&[])), UNKNOWN_NAME);
    }

    #[test]
    fn iso2_requires_exactly_two_characters() {
        assert_eq!(
            resolve_iso2(&props(&[("ISO_A2", "FR")])),
            Some("FR".to_string())
        );
        // Natural Earth marks missing codes with "-99"
        assert_eq!(resolve_iso2(&props(&[("ISO_A2", "-99")])), None);
        assert_eq!(resolve_iso2(&props(&[("iso_a2", "F")])), None);
    }

    #[test]
    fn continent_rejects_empty_values() {
        assert_eq!(resolve_continent(&props(&[("CONTINENT", "")])), None);
        assert_eq!(
            resolve_continent(&props(&[("REGION_UN", "Europe")])),
            Some("Europe".to_string())
        );
    }
}
