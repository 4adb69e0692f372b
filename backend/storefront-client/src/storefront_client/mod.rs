use crate::error::StorefrontClientError;
use crate::password_reset::{PasswordResetPayload, ResetToken};
use crate::product::ProductPayload;
use crate::session::LoginPayload;

use common::{ErrorLocation, HttpStatusCode, RedactedToken};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const ADD_PRODUCT_ENDPOINT: &str = "/add-product";
const RESET_PASSWORD_ENDPOINT: &str = "/reset-password";
const LOGIN_ENDPOINT: &str = "/login";
const FORGET_PASSWORD_ENDPOINT: &str = "/forget_password";
const RESET_TOKEN_QUERY_KEY: &str = "token";
const MESSAGE_FIELD: &str = "message";

/// A resolved response whose body parsed as JSON.
///
/// The status is kept alongside the body so callers decide what a non-2xx
/// reply means for them.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: HttpStatusCode,
    pub body: Value,
}

impl ApiReply {
    /// The `message` field, if the body carries one as a string.
    pub fn message(&self) -> Option<&str> {
        self.body.get(MESSAGE_FIELD).and_then(Value::as_str)
    }

    #[track_caller]
    pub fn require_message(&self) -> Result<&str, StorefrontClientError> {
        let location = ErrorLocation::from(Location::caller());
        self.message()
            .ok_or_else(|| StorefrontClientError::MalformedReply {
                message: format!(
                    "HTTP {} reply has no string '{MESSAGE_FIELD}' field",
                    self.status
                ),
                location,
            })
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontClient {
    base_url: Url,
    client: Client,
}

impl StorefrontClient {
    pub fn new(base_url_str: &str) -> Result<Self, StorefrontClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Duration,
    ) -> Result<Self, StorefrontClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /add-product` with the raw token as the `Authorization` header.
    ///
    /// Any resolved response with a JSON body is returned as `Ok`, whatever
    /// its status.
    pub async fn add_product(
        &self,
        token: &RedactedToken,
        payload: &ProductPayload,
    ) -> Result<ApiReply, StorefrontClientError> {
        let url = self.base_url.join(ADD_PRODUCT_ENDPOINT)?;
        debug!("POST {url} (token: {} chars)", token.len());

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, token.as_str())
            .json(payload)
            .send()
            .await?;

        read_reply(response).await
    }

    /// `POST /reset-password?token=<token>` carrying the new password.
    pub async fn reset_password(
        &self,
        token: &ResetToken,
        payload: &PasswordResetPayload,
    ) -> Result<ApiReply, StorefrontClientError> {
        let url = self.reset_password_url(token)?;
        debug!("POST {} (token: {} chars)", url.path(), token.len());

        let response = self.client.post(url).json(payload).send().await?;

        read_reply(response).await
    }

    /// `POST /login` with a JSON body. A 2xx reply carries `{message, token}`.
    pub async fn login(&self, payload: &LoginPayload) -> Result<ApiReply, StorefrontClientError> {
        let url = self.base_url.join(LOGIN_ENDPOINT)?;
        debug!("POST {url} as '{}'", payload.username);

        let response = self.client.post(url).json(payload).send().await?;

        read_reply(response).await
    }

    /// `POST /forget_password` with a form-encoded `email` field.
    pub async fn forget_password(&self, email: &str) -> Result<ApiReply, StorefrontClientError> {
        let url = self.base_url.join(FORGET_PASSWORD_ENDPOINT)?;
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .form(&[("email", email)])
            .send()
            .await?;

        read_reply(response).await
    }

    /// Reset endpoint with the token appended as a percent-encoded query value.
    pub fn reset_password_url(&self, token: &ResetToken) -> Result<Url, StorefrontClientError> {
        let mut url = self.base_url.join(RESET_PASSWORD_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair(RESET_TOKEN_QUERY_KEY, token.as_str());
        Ok(url)
    }
}

async fn read_reply(response: Response) -> Result<ApiReply, StorefrontClientError> {
    let status = HttpStatusCode::from(response.status().as_u16());
    let body: Value = response.json().await?;

    debug!("Reply HTTP {status}");
    Ok(ApiReply { status, body })
}
