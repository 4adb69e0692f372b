//! User-facing notification strings.
//!
//! Defaults match the storefront backend: English for the product form,
//! Turkish for the password reset page.

use crate::error::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_product_added")]
    pub product_added: String,
    #[serde(default = "default_product_failed")]
    pub product_failed: String,
    #[serde(default = "default_login_required")]
    pub login_required: String,
    /// Substring of a reset reply message that confirms the password changed.
    #[serde(default = "default_reset_success_marker")]
    pub reset_success_marker: String,
    #[serde(default = "default_reset_failed")]
    pub reset_failed: String,
    #[serde(default = "default_reset_missing_token")]
    pub reset_missing_token: String,
    #[serde(default = "default_login_failed")]
    pub login_failed: String,
    #[serde(default = "default_logged_out")]
    pub logged_out: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            product_added: default_product_added(),
            product_failed: default_product_failed(),
            login_required: default_login_required(),
            reset_success_marker: default_reset_success_marker(),
            reset_failed: default_reset_failed(),
            reset_missing_token: default_reset_missing_token(),
            login_failed: default_login_failed(),
            logged_out: default_logged_out(),
        }
    }
}

impl Messages {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reset_success_marker.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("messages.reset_success_marker cannot be empty"),
            });
        }
        Ok(())
    }
}

fn default_product_added() -> String {
    "Product added!".to_string()
}
fn default_product_failed() -> String {
    "Error adding product".to_string()
}
fn default_login_required() -> String {
    "Please log in before adding a product.".to_string()
}
fn default_reset_success_marker() -> String {
    "başarıyla".to_string()
}
fn default_reset_failed() -> String {
    "Bir hata oluştu. Lütfen tekrar deneyin.".to_string()
}
fn default_reset_missing_token() -> String {
    "Geçersiz bağlantı.".to_string()
}
fn default_login_failed() -> String {
    "Giriş yapılamadı. Lütfen tekrar deneyin.".to_string()
}
fn default_logged_out() -> String {
    "Çıkış yapıldı.".to_string()
}
