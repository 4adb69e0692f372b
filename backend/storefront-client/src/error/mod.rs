pub mod config;
pub mod storage;
pub mod storefront_client;
pub mod submit;

pub use config::ConfigError;
pub use storage::StorageError;
pub use storefront_client::StorefrontClientError;
pub use submit::SubmitError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] StorefrontClientError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}
