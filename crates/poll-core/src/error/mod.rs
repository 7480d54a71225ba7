pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::{ErrorLocation, Violation};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        violations: Vec<Violation>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Build a validation error naming every violated field.
    #[track_caller]
    pub fn validation(violations: Vec<Violation>) -> Self {
        let message = violations
            .iter()
            .map(|v| v.field.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        CoreError::Validation {
            message,
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
