use poll_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response body: {message} {location}")]
    UnexpectedBody {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Flag a success response whose body is not shaped as expected
    #[track_caller]
    pub fn unexpected_body(message: impl Into<String>) -> Self {
        ClientError::UnexpectedBody {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
