use common::ErrorLocation;

use storefront_client::error::{ConfigError, CoreError, StorefrontClientError, SubmitError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the terminal host.
///
/// Library errors are flattened to their message; the location is where the
/// host received them.
#[derive(Debug, Error)]
pub enum AppError {
    /// Error from this app (paths, logger, outcome of a command)
    #[error("App Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from storefront-client operations
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn app(message: impl Into<String>) -> Self {
        AppError::App {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        AppError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SubmitError> for AppError {
    #[track_caller]
    fn from(error: SubmitError) -> Self {
        AppError::from(CoreError::from(error))
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        AppError::from(CoreError::from(error))
    }
}

impl From<StorefrontClientError> for AppError {
    #[track_caller]
    fn from(error: StorefrontClientError) -> Self {
        AppError::from(CoreError::from(error))
    }
}
