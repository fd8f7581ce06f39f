// crates/travelmap-core/src/insight.rs

//! Contract for the on-device travel insight generator.
//!
//! The generator is an external collaborator: availability depends on the
//! device/configuration, generation can fail, and this is the one failure
//! the caller is expected to observe and recover from (retry/empty state).
//! Implementations block; callers run them off the store's thread and merge
//! the result back themselves.

use thiserror::Error;

/// Free-text travel notes for a single country.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelInsight {
    pub best_time_to_visit: String,
    pub getting_there: String,
    pub what_to_know: String,
}

#[derive(Debug, Error)]
pub enum InsightError {
    /// The underlying capability is absent on this device/configuration.
    #[error("insight generation is not available")]
    Unavailable,

    #[error("insight generation failed: {0}")]
    Generation(String),
}

/// Source of generated travel notes.
pub trait InsightSource {
    /// Whether generation can be attempted at all. Check before calling
    /// [`InsightSource::insight`].
    fn is_available(&self) -> bool;

    /// Generates the three note fields for a country display name.
    fn insight(&self, country_name: &str) -> Result<TravelInsight, InsightError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        available: bool,
    }

    impl InsightSource for StubSource {
        fn is_available(&self) -> bool {
            self.available
        }

        fn insight(&self, country_name: &str) -> Result<TravelInsight, InsightError> {
            if !self.available {
                return Err(InsightError::Unavailable);
            }
            Ok(TravelInsight {
                best_time_to_visit: format!("Spring in {country_name}"),
                getting_there: "By air".to_string(),
                what_to_know: "Carry cash".to_string(),
            })
        }
    }

    #[test]
    fn unavailable_source_reports_unavailable() {
        let source = StubSource { available: false };
        assert!(!source.is_available());
        assert!(matches!(
            source.insight("France"),
            Err(InsightError::Unavailable)
        ));
    }

    #[test]
    fn available_source_yields_three_fields() {
        let source = StubSource { available: true };
        let insight = source.insight("France").unwrap();
        assert!(insight.best_time_to_visit.contains("France"));
        assert!(!insight.getting_there.is_empty());
        assert!(!insight.what_to_know.is_empty());
    }
}
