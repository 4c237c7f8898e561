// ABOUTME: Withings CLI - command-line front end for the Withings OAuth2 client
// ABOUTME: Builds authorization URLs, exchanges tokens, and fetches health resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! export WITHINGS_CLIENT_ID=... WITHINGS_CLIENT_SECRET=... WITHINGS_CALLBACK_URL=...
//!
//! # Print the URL a user should open to grant access
//! withings-cli authorize-url --state csrf123 --scope activity,metrics
//!
//! # Exchange the callback code for tokens
//! withings-cli exchange --code abc123
//!
//! # Refresh tokens
//! withings-cli refresh --refresh-token def456
//!
//! # Fetch a resource with extra body parameters
//! withings-cli fetch measures --access-token ghi789 --options '{"category":2}'
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use withings_oauth2::config::{TokenRequestMode, WithingsConfig};
use withings_oauth2::logging::LoggingConfig;
use withings_oauth2::providers::{WithingsProvider, WithingsResource};

#[derive(Parser)]
#[command(
    name = "withings-cli",
    about = "Withings OAuth2 client CLI",
    long_about = "Authorize, exchange tokens, and fetch Withings health data. Credentials are read from WITHINGS_* environment variables unless overridden."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Client id override
    #[arg(long, global = true)]
    client_id: Option<String>,

    /// Client secret override
    #[arg(long, global = true)]
    client_secret: Option<String>,

    /// Callback URL override
    #[arg(long, global = true)]
    callback_url: Option<String>,

    /// Token request strategy override (signed or unsigned)
    #[arg(long, global = true)]
    token_mode: Option<TokenRequestMode>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the authorization URL
    AuthorizeUrl {
        /// Opaque CSRF state echoed back to the callback
        #[arg(long)]
        state: String,

        /// Comma-separated scopes without the `user.` prefix
        #[arg(long, default_value = "info,metrics,activity")]
        scope: String,

        /// Percent-encode query values
        #[arg(long)]
        encoded: bool,
    },

    /// Exchange an authorization code for tokens
    Exchange {
        /// Code from the callback query string
        #[arg(long)]
        code: String,
    },

    /// Refresh an access token
    Refresh {
        /// Refresh token from a previous exchange
        #[arg(long)]
        refresh_token: String,
    },

    /// Fetch a resource (devices, goals, measures, activities, intraday, workouts, heart, sleep)
    Fetch {
        /// Resource to fetch
        resource: WithingsResource,

        /// Bearer access token
        #[arg(long, env = "WITHINGS_ACCESS_TOKEN")]
        access_token: String,

        /// JSON object merged over the resource defaults
        #[arg(long)]
        options: Option<String>,
    },
}

/// Environment configuration with command-line overrides applied
fn load_config(cli: &Cli) -> Result<WithingsConfig> {
    let mut config = WithingsConfig::from_env().context("Invalid Withings configuration")?;

    if let Some(client_id) = &cli.client_id {
        config.credentials.set_client_id(client_id.as_str());
    }
    if let Some(client_secret) = &cli.client_secret {
        config.credentials.set_client_secret(client_secret.as_str());
    }
    if let Some(callback_url) = &cli.callback_url {
        config.credentials.set_callback_url(callback_url.as_str());
    }
    if let Some(token_mode) = cli.token_mode {
        config.token_mode = token_mode;
    }

    config.validate_and_log();
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    info!("Withings CLI");

    let config = load_config(&cli)?;
    let withings = WithingsProvider::new(config);

    match cli.command {
        Command::AuthorizeUrl {
            state,
            scope,
            encoded,
        } => commands::oauth::authorize_url(&withings, &state, &scope, encoded)?,
        Command::Exchange { code } => commands::oauth::exchange(&withings, &code).await?,
        Command::Refresh { refresh_token } => {
            commands::oauth::refresh(&withings, &refresh_token).await?;
        }
        Command::Fetch {
            resource,
            access_token,
            options,
        } => {
            commands::fetch::fetch(&withings, resource, &access_token, options.as_deref()).await?;
        }
    }

    Ok(())
}
