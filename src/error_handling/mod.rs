//! Error handling for lookups and startup.
//!
//! This module provides:
//! - The lookup failure taxonomy (`LookupError`, `FailureKind`)
//! - The caller-facing failure value (`LookupFailure`)
//! - Startup errors (`InitializationError`)
//! - Transport error categorization

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, network_error};
pub use types::{FailureKind, InitializationError, LookupError, LookupFailure};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample_error(kind: FailureKind) -> LookupError {
        match kind {
            FailureKind::InvalidInput => LookupError::InvalidInput,
            FailureKind::NetworkError => LookupError::Network("connection refused".into()),
            FailureKind::HttpStatusError => LookupError::HttpStatus(503),
            FailureKind::JsonParseError => LookupError::InvalidJson,
            FailureKind::ShapeError => LookupError::UnexpectedFormat,
            FailureKind::UpstreamRejected => LookupError::UpstreamRejected,
        }
    }

    #[test]
    fn test_every_kind_round_trips_through_error() {
        for kind in FailureKind::iter() {
            assert_eq!(sample_error(kind).kind(), kind);
        }
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(LookupError::InvalidInput.to_string(), "Invalid email format");
        assert_eq!(
            LookupError::Network("timed out".into()).to_string(),
            "Network error: timed out"
        );
        assert_eq!(
            LookupError::HttpStatus(429).to_string(),
            "LeakCheck HTTP 429 response"
        );
        assert_eq!(
            LookupError::InvalidJson.to_string(),
            "Invalid JSON response from LeakCheck"
        );
        assert_eq!(
            LookupError::UnexpectedFormat.to_string(),
            "Unexpected response format from LeakCheck"
        );
        assert_eq!(
            LookupError::UpstreamRejected.to_string(),
            "LeakCheck returned success = false (no data or invalid query)"
        );
    }

    #[test]
    fn test_failure_serializes_as_error_object() {
        let failure = LookupFailure::from(LookupError::HttpStatus(500));
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json, serde_json::json!({"error": "LeakCheck HTTP 500 response"}));
    }

    #[test]
    fn test_failure_display_is_reason() {
        let failure = LookupFailure::from(LookupError::InvalidInput);
        assert_eq!(failure.to_string(), "Invalid email format");
        assert_eq!(failure.reason, "Invalid email format");
    }

    #[test]
    fn test_kind_display() {
        for kind in FailureKind::iter() {
            assert!(!kind.to_string().is_empty());
        }
        assert_eq!(FailureKind::ShapeError.as_str(), "unexpected response shape");
    }
}
