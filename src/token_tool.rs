//! Operator CLI for minting backend credentials.
//!
//! # Usage
//!
//! ```bash
//! # Access token + anti-forgery value (15-minute expiry)
//! MARKBOOK__AUTH__ACCESS_SECRET=... cargo run --bin markbook-token -- access
//!
//! # Non-expiring service token
//! MARKBOOK__AUTH__SERVICE_SECRET=... cargo run --bin markbook-token -- service
//! ```
//!
//! The printed values go into the service's environment (see `auth.mode` in
//! `config/default.toml`); the backend verifies them with the same secrets.

use clap::{Parser, Subcommand};
use markbook_auth::TokenIssuer;

#[derive(Parser)]
#[command(name = "markbook-token")]
#[command(about = "Mint access or service tokens for the records backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue an access token bound to a fresh anti-forgery value
    Access {
        /// Token subject
        #[arg(long, default_value = "markbook-service")]
        subject: String,

        /// HS256 signing secret shared with the backend
        #[arg(long, env = "MARKBOOK__AUTH__ACCESS_SECRET")]
        secret: String,
    },

    /// Issue a non-expiring service identity token
    Service {
        /// Service identity claim
        #[arg(long, default_value = "markbook-service")]
        subject: String,

        /// HS256 signing secret shared with the backend
        #[arg(long, env = "MARKBOOK__AUTH__SERVICE_SECRET")]
        secret: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Access { subject, secret } => {
            let issuer = TokenIssuer::new(&secret)?;
            let (token, anti_forgery) = issuer.issue_access_token(&subject)?;
            println!("CSRF Token: {anti_forgery}");
            println!("Access Token: {token}");
            println!("Present both on every call: the backend recomputes the keyed hash of");
            println!("the CSRF token and compares it to the token's csrf_hmac claim.");
        }
        Commands::Service { subject, secret } => {
            let issuer = TokenIssuer::new(&secret)?;
            let token = issuer.issue_service_token(&subject)?;
            println!("Service Token: {token}");
        }
    }

    Ok(())
}
