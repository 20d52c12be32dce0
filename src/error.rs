// Error types for the analytics pipeline

use thiserror::Error;

/// Errors the analytics pipeline can surface to callers.
///
/// Every stage is a pure function; errors propagate upward with `?` and
/// nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// An extremum or average was requested over an empty collection.
    /// The payload names the aggregate that could not be computed.
    #[error("cannot compute {0}: input collection is empty")]
    EmptyInput(String),

    /// A record failed validation at load/group time.
    #[error("malformed order record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

impl AnalyticsError {
    /// Shorthand for the empty-collection case.
    pub fn empty(what: &str) -> Self {
        AnalyticsError::EmptyInput(what.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message_names_aggregate() {
        let err = AnalyticsError::empty("top customers");
        assert_eq!(
            err.to_string(),
            "cannot compute top customers: input collection is empty"
        );
    }

    #[test]
    fn test_malformed_record_message() {
        let err = AnalyticsError::MalformedRecord {
            index: 3,
            reason: "customer name is empty".to_string(),
        };
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("customer name is empty"));
    }
}
