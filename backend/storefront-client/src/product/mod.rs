//! Product submission form.
//!
//! Reads the bearer token from the credential store and posts the entered
//! product to `/add-product`. Every resolved reply counts as "added".

pub mod price;

pub use price::parse_price;

use crate::StorefrontClient;
use crate::config::StorefrontConfig;
use crate::error::{StorefrontClientError, SubmitError};
use crate::page::{CredentialStore, Notifier, SubmitEvent};
use crate::storefront_client::ApiReply;

use common::ErrorLocation;

use std::panic::Location;

use log::{error, info, warn};
use serde::Serialize;

/// Raw values of the product form inputs at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// Wire body of `POST /add-product`.
///
/// A price that does not parse is NaN and goes out as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub product_name: String,
    pub product_price: f64,
    pub product_description: String,
}

impl From<&ProductForm> for ProductPayload {
    fn from(form: &ProductForm) -> Self {
        Self {
            product_name: form.name.clone(),
            product_price: parse_price(&form.price),
            product_description: form.description.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductSubmitHandler {
    client: StorefrontClient,
    token_key: String,
    added_message: String,
    failed_message: String,
    login_required_message: String,
}

impl ProductSubmitHandler {
    pub fn new(client: StorefrontClient, config: &StorefrontConfig) -> Self {
        Self {
            client,
            token_key: config.storage.token_key.clone(),
            added_message: config.messages.product_added.clone(),
            failed_message: config.messages.product_failed.clone(),
            login_required_message: config.messages.login_required.clone(),
        }
    }

    /// Handle one submission of the product form.
    ///
    /// Without a stored token nothing is sent: the user is told to log in and
    /// `SubmitError::MissingCredential` is returned.
    ///
    /// # Errors
    /// Returns [`SubmitError`] after the failure notification has been shown.
    pub async fn submit<S, N>(
        &self,
        event: &mut SubmitEvent,
        form: &ProductForm,
        store: &S,
        notifier: &N,
    ) -> Result<ApiReply, SubmitError>
    where
        S: CredentialStore + ?Sized,
        N: Notifier + ?Sized,
    {
        event.prevent_default();

        let token = match store.get_item(&self.token_key) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                warn!(
                    "No credential under '{}', product not submitted",
                    self.token_key
                );
                notifier.alert(&self.login_required_message);
                return Err(SubmitError::MissingCredential {
                    message: format!("no credential stored under '{}'", self.token_key),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => {
                error!("Error reading credential: {e}");
                notifier.alert(&self.failed_message);
                return Err(e.into());
            }
        };

        let payload = ProductPayload::from(form);

        match self.client.add_product(&token, &payload).await {
            Ok(reply) => {
                if !reply.status.is_success() {
                    warn!(
                        "add-product answered HTTP {} for '{}'",
                        reply.status, payload.product_name
                    );
                }
                info!("Product '{}' submitted", payload.product_name);
                notifier.alert(&self.added_message);
                Ok(reply)
            }
            Err(e) => Err(self.fail(e, notifier)),
        }
    }

    fn fail<N: Notifier + ?Sized>(&self, e: StorefrontClientError, notifier: &N) -> SubmitError {
        error!("Error adding product: {e}");
        notifier.alert(&self.failed_message);
        e.into()
    }
}
