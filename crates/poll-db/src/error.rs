use poll_core::{ErrorLocation, Violation};

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Poll {id} not found {location}")]
    PollNotFound { id: Uuid, location: ErrorLocation },

    #[error("Option index {index} out of range for poll {id} {location}")]
    OptionOutOfRange {
        id: Uuid,
        index: i64,
        location: ErrorLocation,
    },

    #[error("Malformed poll record rejected: {} violation(s) {location}", .violations.len())]
    MalformedPoll {
        violations: Vec<Violation>,
        location: ErrorLocation,
    },

    #[error("Corrupt row: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn poll_not_found(id: Uuid) -> Self {
        DbError::PollNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn option_out_of_range(id: Uuid, index: i64) -> Self {
        DbError::OptionOutOfRange {
            id,
            index,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(violations: Vec<Violation>) -> Self {
        DbError::MalformedPoll {
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt_row(message: impl Into<String>) -> Self {
        DbError::CorruptRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
