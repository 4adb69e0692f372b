//! Shared primitives for the storefront form clients.
//!
//! This crate holds the small value types every other crate leans on:
//! error locations, redacted credentials and HTTP status helpers. It has
//! no I/O and no business logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): Value types and error plumbing
//! - **storefront-client**: HTTP client, page seams and form handlers
//! - **storefront-forms**: Terminal host wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
