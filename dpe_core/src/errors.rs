//! # Error Types
//!
//! Structured error types for the assessment engine. Lookup misses never
//! surface here - every table in the method carries a documented fallback -
//! so the only failure a caller must handle is the insufficient-data
//! outcome, which is an expected result of under-described dwellings rather
//! than an exceptional condition.
//!
//! ## Example
//!
//! ```rust
//! use dpe_core::errors::DpeError;
//!
//! let err = DpeError::InsufficientFloorArea { area_m2: 4.0 };
//! assert_eq!(err.error_code(), "INSUFFICIENT_FLOOR_AREA");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine operations
pub type DpeResult<T> = Result<T, DpeError>;

/// Structured error type for dwelling assessments.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DpeError {
    /// The declared habitable area is too small to rate.
    ///
    /// The method requires at least 5 m² of declared room surface; below
    /// that no indicator is meaningful and the engine produces no result.
    #[error("insufficient data: reference floor area {area_m2} m² is below the 5 m² minimum")]
    InsufficientFloorArea { area_m2: f64 },

    /// JSON serialization/deserialization error at the snapshot boundary
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl DpeError {
    /// True when the error is the expected no-result outcome rather than a
    /// malformed snapshot.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, DpeError::InsufficientFloorArea { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DpeError::InsufficientFloorArea { .. } => "INSUFFICIENT_FLOOR_AREA",
            DpeError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for DpeError {
    fn from(err: serde_json::Error) -> Self {
        DpeError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DpeError::InsufficientFloorArea { area_m2: 3.5 };
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DpeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let error = DpeError::InsufficientFloorArea { area_m2: 4.0 };
        assert!(error.is_insufficient_data());
        assert_eq!(error.error_code(), "INSUFFICIENT_FLOOR_AREA");
    }
}
