//! Error types for Reunion Planner

use thiserror::Error;

use crate::types::TravelerId;

/// A traveler's form failed validation on submit.
///
/// The display text is what the traveler sees in the blocking notice, so it
/// always names the traveler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Minimum budget is not strictly below the maximum
    #[error("Traveler {0}: Maximum budget must be greater than minimum budget.")]
    BudgetOrder(TravelerId),

    /// No preferred destination selected
    #[error("Traveler {0}: Please select a preferred destination.")]
    MissingDestination(TravelerId),

    /// No starting point selected
    #[error("Traveler {0}: Please select a starting point.")]
    MissingStartingPoint(TravelerId),
}

impl ValidationError {
    /// The traveler whose form was rejected.
    pub fn traveler(&self) -> TravelerId {
        match self {
            ValidationError::BudgetOrder(id)
            | ValidationError::MissingDestination(id)
            | ValidationError::MissingStartingPoint(id) => *id,
        }
    }
}

/// The shared date range could not be edited or locked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// One or both dates are missing
    #[error("Please select both start and end dates.")]
    Incomplete,

    /// Start date falls after the end date
    #[error("Start date cannot be after end date.")]
    Inverted,

    /// Dates cannot change while the range is locked
    #[error("Date range is locked; unlock it before editing.")]
    Locked,

    /// Input was not a `YYYY-MM-DD` date
    #[error("Invalid date: {0}")]
    Unparseable(String),
}

/// Main error type for Reunion Planner operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// A traveler's form was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The date range was rejected
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Traveler id outside 1..=N for the current session
    #[error("Traveler not found: {0}")]
    TravelerNotFound(TravelerId),

    /// Session or slider configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Finalize was requested while the completion gate is closed
    #[error("Answers are incomplete: {0}")]
    Incomplete(String),

    /// Data file could not be loaded from any configured location
    #[error("Load error: {0}")]
    Load(String),

    /// Persistence sink rejected the payload
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// City list could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport error from the save endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_traveler() {
        let err = ValidationError::BudgetOrder(TravelerId::new(2).unwrap());
        assert_eq!(
            err.to_string(),
            "Traveler 2: Maximum budget must be greater than minimum budget."
        );

        let err = ValidationError::MissingStartingPoint(TravelerId::new(3).unwrap());
        assert_eq!(err.to_string(), "Traveler 3: Please select a starting point.");
        assert_eq!(err.traveler().get(), 3);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: CoreError = ValidationError::MissingDestination(TravelerId::FIRST).into();
        assert_eq!(err.to_string(), "Traveler 1: Please select a preferred destination.");
    }
}
