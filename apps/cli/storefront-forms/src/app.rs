use crate::cli::Args;
use crate::commands::run;
use crate::error::AppError;
use crate::logger::initialize as LoggerInitialize;
use crate::terminal::TerminalPage;

use storefront_client::config::StorefrontConfig;
use storefront_client::page::PageLocation;
use storefront_client::paths::{StorefrontPaths, detect_storefront_paths};
use storefront_client::storage::FileCredentialStore;

use std::fs::create_dir_all;

use log::info;

/// Resolve paths, start logging, load config and run the requested command.
pub async fn start(args: Args) -> Result<(), AppError> {
    let paths = match args.data_dir {
        Some(dir) => StorefrontPaths::from_dir(dir),
        None => detect_storefront_paths()?,
    };

    let log_dir = paths.log_dir();
    create_dir_all(&log_dir).map_err(|e| AppError::app(format!(
        "Failed to create log directory {}: {e}",
        log_dir.display()
    )))?;

    // Logger first so config problems are recorded
    LoggerInitialize(&log_dir)?;

    info!("storefront-forms starting");
    info!("Data directory: {} ({})", paths.data_dir.display(), paths.source);

    let mut config = StorefrontConfig::load(&paths.data_dir)?;
    config.apply_env_overrides()?;
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
        config.validate()?;
    }

    let store = FileCredentialStore::new(paths.storage_file(&config));
    let page = TerminalPage::stdout(PageLocation::parse(&config.server.base_url)?);

    run(args.cmd, &config, &store, &page).await
}
