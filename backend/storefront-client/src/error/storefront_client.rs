use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StorefrontClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// The reply parsed as JSON but lacks a field the caller relies on.
    #[error("Malformed Reply Error: {message} {location}")]
    MalformedReply {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for StorefrontClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        StorefrontClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StorefrontClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        StorefrontClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StorefrontClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        StorefrontClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
