// crates/travelmap-core/src/prelude.rs

//! travelmap-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::error::{Result, TravelError};
pub use crate::insight::{InsightError, InsightSource, TravelInsight};
pub use crate::model::{CountryIndex, CountryShape, Polygon, Ring};
pub use crate::prefs::{FilePrefs, MemoryPrefs, PrefStore};
pub use crate::stats::{ContinentStat, TravelStats};
pub use crate::status::{StatusLedger, VisitationStatus};
pub use crate::store::CountryStore;
pub use crate::style::{fill_color, flag_emoji, stroke_color, Rgba};
pub use crate::text::{equals_folded, fold_key};
