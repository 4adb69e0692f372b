//! Host seams standing in for the browser page.
//!
//! The handlers never touch a real DOM. They read credentials from a
//! [`CredentialStore`] (local storage), report to the user through a
//! [`Notifier`] (blocking alert) and move the user with a [`Navigator`]
//! (`location.href = ...`). Hosts implement these for their environment.

pub mod location;

pub use location::PageLocation;

use crate::error::StorageError;

use common::RedactedToken;

/// Persistent key/value storage holding credentials across page loads.
pub trait CredentialStore {
    fn get_item(&self, key: &str) -> Result<Option<RedactedToken>, StorageError>;

    fn set_item(&self, key: &str, value: &RedactedToken) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// User-facing notification channel.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Page navigation.
pub trait Navigator {
    /// Navigate to `path`, resolved against the current page origin.
    fn assign(&self, path: &str);
}

/// A user-initiated form submission.
///
/// Handlers call [`SubmitEvent::prevent_default`] before doing anything else so
/// the host does not perform its own navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
