use storefront_forms::app::start;
use storefront_forms::cli::Args;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match start(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
