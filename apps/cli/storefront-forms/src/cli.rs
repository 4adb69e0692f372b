use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storefront-forms", version, about = "Submit storefront forms from the terminal")]
pub struct Args {
    /// Directory holding config.json, the credential store and logs.
    /// Defaults to STOREFRONT_DATA_DIR or the platform data directory.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Backend base URL, overriding config and environment.
    /// Example: `http://127.0.0.1:5000/`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a product using the stored login token.
    AddProduct {
        #[arg(long)]
        name: String,

        /// Free text; the leading number is used.
        #[arg(long)]
        price: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Set a new password from a reset link.
    ResetPassword {
        /// The reset link as received, e.g. `http://127.0.0.1:5000/reset-password?token=...`
        #[arg(long)]
        page_url: String,

        #[arg(long)]
        new_password: String,
    },

    /// Log in and store the issued token.
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the stored token.
    Logout,

    /// Ask for a password reset link by e-mail.
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
}
