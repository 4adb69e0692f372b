use crate::cli::Command;
use crate::error::AppError;
use crate::terminal::TerminalPage;

use storefront_client::StorefrontClient;
use storefront_client::config::StorefrontConfig;
use storefront_client::page::{CredentialStore, PageLocation, SubmitEvent};
use storefront_client::password_reset::{
    PasswordResetForm, PasswordResetHandler, ResetStatus, ResetToken,
};
use storefront_client::product::{ProductForm, ProductSubmitHandler};
use storefront_client::session::{LoginPayload, SessionHandler};

use std::io::Write;

use log::info;

/// Run one command against the configured backend.
///
/// User-facing output goes through `page`; the returned error is for the
/// exit status and the log.
pub async fn run<S, W>(
    command: Command,
    config: &StorefrontConfig,
    store: &S,
    page: &TerminalPage<W>,
) -> Result<(), AppError>
where
    S: CredentialStore + ?Sized,
    W: Write,
{
    let client = client_for(&config.server.base_url, config)?;
    let mut event = SubmitEvent::new();

    match command {
        Command::AddProduct {
            name,
            price,
            description,
        } => {
            let handler = ProductSubmitHandler::new(client, config);
            let form = ProductForm::new(name, price, description);
            handler.submit(&mut event, &form, store, page).await?;
        }
        Command::ResetPassword {
            page_url,
            new_password,
        } => {
            let location = PageLocation::parse(&page_url)?;
            let token = ResetToken::from_location(&location);

            // Request and redirect both resolve against the link's origin
            let origin = location.resolve("/")?;
            page.visit(location);

            let handler = PasswordResetHandler::new(client_for(origin.as_str(), config)?, config);
            let form = PasswordResetForm::new(new_password);
            let outcome = handler
                .submit(&mut event, token.as_ref(), &form, page, page)
                .await?;

            if outcome.status != ResetStatus::Succeeded {
                return Err(AppError::app(format!(
                    "password not reset (HTTP {}, {:?})",
                    outcome.http_status, outcome.status
                )));
            }
        }
        Command::Login { username, password } => {
            let handler = SessionHandler::new(client, config);
            let payload = LoginPayload::new(username, password);
            let token = handler.login(&mut event, &payload, store, page).await?;
            info!("Stored login token ({} chars)", token.len());
        }
        Command::Logout => {
            SessionHandler::new(client, config).logout(store, page, page)?;
        }
        Command::ForgotPassword { email } => {
            let handler = SessionHandler::new(client, config);
            let reply = handler.forgot_password(&mut event, &email, page).await?;

            if !reply.status.is_success() {
                return Err(AppError::app(format!(
                    "reset link not sent (HTTP {})",
                    reply.status
                )));
            }
        }
    }

    Ok(())
}

fn client_for(base_url: &str, config: &StorefrontConfig) -> Result<StorefrontClient, AppError> {
    Ok(StorefrontClient::with_timeout(base_url, config.server.timeout())?)
}
