use super::{StorageError, StorefrontClientError};

use common::ErrorLocation;

use thiserror::Error;

/// Failure of a form submission, returned after the user has been notified.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No credential was available, so no request was sent.
    #[error("Missing Credential Error: {message} {location}")]
    MissingCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Client(#[from] StorefrontClientError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
