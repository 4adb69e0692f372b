pub mod config;
pub mod error;
pub mod page;
pub mod password_reset;
pub mod paths;
pub mod product;
pub mod session;
pub mod storage;

mod storefront_client;
#[cfg(test)]
mod tests;

pub use storefront_client::{ApiReply, StorefrontClient};

pub const STOREFRONT_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const STOREFRONT_SERVER_PORT: u16 = 5000;
pub const STOREFRONT_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    STOREFRONT_SERVER_HOSTNAME,
    ":",
    STOREFRONT_SERVER_PORT,
    "/"
);
