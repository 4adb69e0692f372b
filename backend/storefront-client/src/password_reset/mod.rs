//! Password reset form.
//!
//! The reset token comes from the `token` query parameter of the page the
//! user opened from the reset e-mail. It is extracted once by the host and
//! handed to every submission.

use crate::StorefrontClient;
use crate::config::StorefrontConfig;
use crate::error::{StorefrontClientError, SubmitError};
use crate::page::{Navigator, Notifier, PageLocation, SubmitEvent};

use common::{ErrorLocation, HttpStatusCode, RedactedToken};

use std::fmt;
use std::panic::Location;

use log::{error, info, warn};
use serde::Serialize;

const TOKEN_QUERY_PARAM: &str = "token";

/// Token identifying one password reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetToken(RedactedToken);

impl ResetToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(RedactedToken::new(token))
    }

    /// Extract the `token` query parameter. An empty value counts as absent.
    pub fn from_location(location: &PageLocation) -> Option<Self> {
        location
            .query_param(TOKEN_QUERY_PARAM)
            .filter(|token| !token.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordResetForm {
    pub new_password: String,
}

impl PasswordResetForm {
    pub fn new(new_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
        }
    }
}

impl fmt::Debug for PasswordResetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetForm")
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

/// Wire body of `POST /reset-password`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetPayload {
    pub new_password: String,
}

impl From<&PasswordResetForm> for PasswordResetPayload {
    fn from(form: &PasswordResetForm) -> Self {
        Self {
            new_password: form.new_password.clone(),
        }
    }
}

impl fmt::Debug for PasswordResetPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetPayload")
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

/// How the backend answered a reset attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStatus {
    /// 2xx and the message confirms the change.
    Succeeded,
    /// 2xx but the message does not confirm the change.
    Unconfirmed,
    /// Non-2xx (expired or invalid link, missing field, server error).
    Rejected,
}

impl ResetStatus {
    pub fn classify(status: HttpStatusCode, message: &str, success_marker: &str) -> Self {
        if !status.is_success() {
            ResetStatus::Rejected
        } else if message.contains(success_marker) {
            ResetStatus::Succeeded
        } else {
            ResetStatus::Unconfirmed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    pub status: ResetStatus,
    pub http_status: HttpStatusCode,
    /// Reply message, shown to the user verbatim.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PasswordResetHandler {
    client: StorefrontClient,
    login_path: String,
    success_marker: String,
    failed_message: String,
    missing_token_message: String,
}

impl PasswordResetHandler {
    pub fn new(client: StorefrontClient, config: &StorefrontConfig) -> Self {
        Self {
            client,
            login_path: config.navigation.login_path.clone(),
            success_marker: config.messages.reset_success_marker.clone(),
            failed_message: config.messages.reset_failed.clone(),
            missing_token_message: config.messages.reset_missing_token.clone(),
        }
    }

    /// Handle one submission of the reset form.
    ///
    /// The reply message is always shown. Navigation to the login page happens
    /// only for [`ResetStatus::Succeeded`].
    ///
    /// # Errors
    /// Returns [`SubmitError`] when no token is available, when the request
    /// fails, or when the reply has no `message`. The user has been notified.
    pub async fn submit<N, V>(
        &self,
        event: &mut SubmitEvent,
        token: Option<&ResetToken>,
        form: &PasswordResetForm,
        notifier: &N,
        navigator: &V,
    ) -> Result<ResetOutcome, SubmitError>
    where
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        event.prevent_default();

        let Some(token) = token else {
            warn!("Reset page has no token, password not submitted");
            notifier.alert(&self.missing_token_message);
            return Err(SubmitError::MissingCredential {
                message: String::from("reset page URL carries no token"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let payload = PasswordResetPayload::from(form);

        let reply = match self.client.reset_password(token, &payload).await {
            Ok(reply) => reply,
            Err(e) => return Err(self.fail(e, notifier)),
        };

        let message = match reply.require_message() {
            Ok(message) => message.to_string(),
            Err(e) => return Err(self.fail(e, notifier)),
        };

        notifier.alert(&message);

        let status = ResetStatus::classify(reply.status, &message, &self.success_marker);
        match status {
            ResetStatus::Succeeded => {
                info!("Password reset confirmed, redirecting to {}", self.login_path);
                navigator.assign(&self.login_path);
            }
            ResetStatus::Unconfirmed => {
                info!("Password reset answered HTTP {} without confirmation", reply.status);
            }
            ResetStatus::Rejected if reply.status.is_server_error() => {
                error!("Password reset failed on the server with HTTP {}", reply.status);
            }
            ResetStatus::Rejected => {
                warn!("Password reset rejected with HTTP {}", reply.status);
            }
        }

        Ok(ResetOutcome {
            status,
            http_status: reply.status,
            message,
        })
    }

    fn fail<N: Notifier + ?Sized>(&self, e: StorefrontClientError, notifier: &N) -> SubmitError {
        error!("Error resetting password: {e}");
        notifier.alert(&self.failed_message);
        e.into()
    }
}
