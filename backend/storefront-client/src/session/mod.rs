//! Login, logout and forgot-password flows.
//!
//! Login is what puts the bearer token into the credential store that the
//! product form reads; logout takes it out again.

use crate::StorefrontClient;
use crate::config::StorefrontConfig;
use crate::error::{StorefrontClientError, SubmitError};
use crate::page::{CredentialStore, Navigator, Notifier, SubmitEvent};
use crate::storefront_client::ApiReply;

use common::{ErrorLocation, RedactedToken};

use std::fmt;
use std::panic::Location;

use log::{error, info, warn};
use serde::Serialize;

const TOKEN_FIELD: &str = "token";

/// Wire body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl LoginPayload {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPayload")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SessionHandler {
    client: StorefrontClient,
    token_key: String,
    login_path: String,
    login_failed_message: String,
    logged_out_message: String,
    request_failed_message: String,
}

impl SessionHandler {
    pub fn new(client: StorefrontClient, config: &StorefrontConfig) -> Self {
        Self {
            client,
            token_key: config.storage.token_key.clone(),
            login_path: config.navigation.login_path.clone(),
            login_failed_message: config.messages.login_failed.clone(),
            logged_out_message: config.messages.logged_out.clone(),
            request_failed_message: config.messages.reset_failed.clone(),
        }
    }

    /// Log in and store the returned token under the configured key.
    ///
    /// A non-2xx reply shows the server's message and stores nothing.
    pub async fn login<S, N>(
        &self,
        event: &mut SubmitEvent,
        payload: &LoginPayload,
        store: &S,
        notifier: &N,
    ) -> Result<RedactedToken, SubmitError>
    where
        S: CredentialStore + ?Sized,
        N: Notifier + ?Sized,
    {
        event.prevent_default();

        let reply = match self.client.login(payload).await {
            Ok(reply) => reply,
            Err(e) => return Err(self.fail_login(e, notifier)),
        };

        if !reply.status.is_success() {
            let message = reply
                .message()
                .unwrap_or(self.login_failed_message.as_str())
                .to_string();
            if reply.status.is_client_error() {
                warn!("Login for '{}' rejected with HTTP {}", payload.username, reply.status);
            } else {
                error!("Login for '{}' failed with HTTP {}", payload.username, reply.status);
            }
            notifier.alert(&message);
            return Err(StorefrontClientError::Server {
                status: reply.status,
                message,
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let Some(token) = reply
            .body
            .get(TOKEN_FIELD)
            .and_then(|value| value.as_str())
            .filter(|token| !token.is_empty())
            .map(RedactedToken::new)
        else {
            let e = StorefrontClientError::MalformedReply {
                message: format!("login reply has no '{TOKEN_FIELD}' field"),
                location: ErrorLocation::from(Location::caller()),
            };
            return Err(self.fail_login(e, notifier));
        };

        if let Err(e) = store.set_item(&self.token_key, &token) {
            error!("Error storing credential: {e}");
            notifier.alert(&self.login_failed_message);
            return Err(e.into());
        }

        info!("Logged in as '{}'", payload.username);
        if let Some(message) = reply.message() {
            notifier.alert(message);
        }

        Ok(token)
    }

    /// Remove the stored token and go to the login page. No request is sent.
    pub fn logout<S, N, V>(&self, store: &S, notifier: &N, navigator: &V) -> Result<(), SubmitError>
    where
        S: CredentialStore + ?Sized,
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        store.remove_item(&self.token_key)?;

        info!("Logged out");
        notifier.alert(&self.logged_out_message);
        navigator.assign(&self.login_path);
        Ok(())
    }

    /// Ask the backend to e-mail a reset link. The reply message is shown verbatim.
    pub async fn forgot_password<N>(
        &self,
        event: &mut SubmitEvent,
        email: &str,
        notifier: &N,
    ) -> Result<ApiReply, SubmitError>
    where
        N: Notifier + ?Sized,
    {
        event.prevent_default();

        let reply = match self.client.forget_password(email).await {
            Ok(reply) => reply,
            Err(e) => return Err(self.fail_request(e, notifier)),
        };

        match reply.require_message() {
            Ok(message) => notifier.alert(message),
            Err(e) => return Err(self.fail_request(e, notifier)),
        }

        if !reply.status.is_success() {
            warn!("Reset link request answered HTTP {}", reply.status);
        }
        Ok(reply)
    }

    fn fail_login<N: Notifier + ?Sized>(
        &self,
        e: StorefrontClientError,
        notifier: &N,
    ) -> SubmitError {
        error!("Error logging in: {e}");
        notifier.alert(&self.login_failed_message);
        e.into()
    }

    fn fail_request<N: Notifier + ?Sized>(
        &self,
        e: StorefrontClientError,
        notifier: &N,
    ) -> SubmitError {
        error!("Error requesting reset link: {e}");
        notifier.alert(&self.request_failed_message);
        e.into()
    }
}
