//! Error types for `workout_tracker_lib`.
//!
//! None of these are fatal. Validation errors are handed back to the user to
//! correct the form, stale ids are absorbed as no-ops by the controller, and a
//! missing position only disables the map.

use std::fmt;

use thiserror::Error;

use crate::workout::WorkoutId;

/// A numeric input field of the workout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Distance => write!(f, "distance"),
            Field::Duration => write!(f, "duration"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid {field} {input:?}: expected a finite number greater than zero")]
    Validation { field: Field, input: String },

    #[error("workout {0} not found")]
    NotFound(WorkoutId),

    #[error("workout {0} is already registered")]
    DuplicateId(WorkoutId),

    #[error("no location selected on the map")]
    NoPendingLocation,

    #[error("the map is not available")]
    MapUnavailable,

    #[error("current position unavailable: {0}")]
    GeolocationUnavailable(String),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
