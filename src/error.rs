use thiserror::Error;

use crate::models::hall_model::MAX_CAPACITY;

/// Invariant violations raised when constructing or mutating an entity.
/// Input is never silently corrected; the caller handles the rejection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("movie title must not be empty")]
    EmptyTitle,
    #[error("movie duration must be a positive number of minutes")]
    NonPositiveDuration,
    #[error("hall capacity must be between 1 and {MAX_CAPACITY} seats")]
    CapacityOutOfRange,
}
